//! `mlweb` command line: validate and submit contact forms, inspect drafts,
//! filter and search a portfolio catalog.

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use mlweb_core::telemetry::{self, LogFormat};
use mlweb_core::{FileStore, SiteConfig};
use mlweb_forms::catalog::form_for;
use mlweb_forms::validation::validate;
use mlweb_forms::{DraftStore, FormType, SubmitOutcome};
use mlweb_site::{categories, load_portfolio, Site, SiteDeps};
use mlweb_ui::{Filter, Portfolio, PortfolioItem};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

fn form_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("form")
            .long("form")
            .default_value("general")
            .help("Form type: general, project or audit"),
    )
    .arg(
        Arg::new("field")
            .long("field")
            .short('f')
            .action(ArgAction::Append)
            .help("Field value as name=value"),
    )
}

fn catalog_arg() -> Arg {
    Arg::new("catalog")
        .long("catalog")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Portfolio catalog (JSON array of items)")
}

fn cli() -> Command {
    Command::new("mlweb")
        .version(mlweb_site::VERSION)
        .about("MLWeb site runtime")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML site configuration"),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .global(true)
                .default_value("mlweb-store.json")
                .value_parser(value_parser!(PathBuf))
                .help("Local storage file"),
        )
        .arg(
            Arg::new("json-logs")
                .long("json-logs")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand(form_args(
            Command::new("validate").about("Validate field values against a form"),
        ))
        .subcommand(form_args(
            Command::new("submit").about("Fill in a form and submit it"),
        ))
        .subcommand(
            Command::new("draft")
                .about("Inspect stored drafts")
                .subcommand_required(true)
                .subcommand(form_args(Command::new("show").about("Print a stored draft")))
                .subcommand(form_args(Command::new("clear").about("Delete a stored draft"))),
        )
        .subcommand(
            Command::new("filter")
                .about("Apply a portfolio filter")
                .arg(catalog_arg())
                .arg(Arg::new("filter").default_value("all").help("Category or \"all\"")),
        )
        .subcommand(
            Command::new("search")
                .about("Search the portfolio")
                .arg(catalog_arg())
                .arg(Arg::new("term").required(true)),
        )
}

fn load_config(matches: &ArgMatches) -> Result<SiteConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => Ok(SiteConfig::load(path)?),
        None => Ok(SiteConfig::default()),
    }
}

fn open_store(matches: &ArgMatches) -> Result<FileStore> {
    let path = matches
        .get_one::<PathBuf>("store")
        .context("missing --store")?;
    Ok(FileStore::open(path))
}

fn form_type(args: &ArgMatches) -> FormType {
    args.get_one::<String>("form")
        .map_or(FormType::General, |s| FormType::from(s.as_str()))
}

fn field_values(args: &ArgMatches) -> Result<Vec<(String, String)>> {
    args.get_many::<String>("field")
        .into_iter()
        .flatten()
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) => Ok((name.trim().to_string(), value.to_string())),
            None => bail!("field must be name=value, got {pair:?}"),
        })
        .collect()
}

fn print_items<'a>(items: impl IntoIterator<Item = &'a PortfolioItem>) {
    for item in items {
        println!("{}  [{}]", item.title, item.categories.join(", "));
    }
}

fn gallery(args: &ArgMatches) -> Result<Portfolio> {
    let path = args.get_one::<PathBuf>("catalog").context("missing --catalog")?;
    let items = load_portfolio(path)?;
    let filters: Vec<String> = categories(&items).into_iter().map(str::to_string).collect();
    let filters: Vec<&str> = filters.iter().map(String::as_str).collect();
    Ok(Portfolio::new(items, &filters)?)
}

fn run_validate(args: &ArgMatches) -> Result<bool> {
    let form_type = form_type(args);
    let mut form = form_for(&form_type).with_context(|| format!("unknown form {form_type}"))?;
    for (name, value) in field_values(args)? {
        form.set_value(&name, value)?;
    }
    match validate(&mut form) {
        Ok(()) => {
            println!("{form_type}: valid");
            Ok(true)
        }
        Err(rejection) => {
            for issue in &rejection.issues {
                println!("{}: {}", issue.field, issue.reason);
            }
            Ok(false)
        }
    }
}

/// Time to stay alive after a successful submit so the scheduled draft
/// deletion runs; none when drafts are not kept
fn pending_draft_clear(config: &SiteConfig) -> Option<Duration> {
    config.autosave_drafts.then(|| config.draft_clear_delay())
}

async fn run_submit(matches: &ArgMatches, args: &ArgMatches) -> Result<bool> {
    let config = load_config(matches)?;
    let store = open_store(matches)?;
    let site = Site::init(config, SiteDeps::new(Arc::new(store)))?;

    let form_type = form_type(args);
    let session = site
        .form(&form_type)
        .with_context(|| format!("unknown form {form_type}"))?;
    for (name, value) in field_values(args)? {
        session.on_input(&name, value)?;
    }

    match session.on_submit().await {
        SubmitOutcome::Sent { message, receipt } => {
            println!("{message} ({})", receipt.reference);
            if let Some(wait) = pending_draft_clear(site.config()) {
                tokio::time::sleep(wait).await;
            }
            Ok(true)
        }
        SubmitOutcome::Rejected(rejection) => {
            println!("{}", site.config().validation_error_message);
            for issue in &rejection.issues {
                println!("  {}: {}", issue.field, issue.reason);
            }
            Ok(false)
        }
        SubmitOutcome::Failed(e) => {
            println!("{}: {e}", site.config().submit_error_message);
            Ok(false)
        }
        SubmitOutcome::Ignored => Ok(false),
    }
}

fn run_draft(matches: &ArgMatches) -> Result<bool> {
    let config = Arc::new(load_config(matches)?);
    let drafts = DraftStore::new(Arc::new(open_store(matches)?), config);
    match matches.subcommand() {
        Some(("show", args)) => {
            let form_type = form_type(args);
            match drafts.load(&form_type)? {
                Some(draft) => println!("{}", serde_json::to_string_pretty(&draft.fields)?),
                None => println!("no draft for {form_type}"),
            }
        }
        Some(("clear", args)) => {
            let form_type = form_type(args);
            drafts.clear(&form_type)?;
            println!("draft for {form_type} cleared");
        }
        _ => unreachable!("subcommand required"),
    }
    Ok(true)
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();
    let format = if matches.get_flag("json-logs") {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    telemetry::init("info", format);

    let ok = match matches.subcommand() {
        Some(("validate", args)) => run_validate(args)?,
        Some(("submit", args)) => run_submit(&matches, args).await?,
        Some(("draft", args)) => run_draft(args)?,
        Some(("filter", args)) => {
            let mut gallery = gallery(args)?;
            let filter = args
                .get_one::<String>("filter")
                .map_or(Filter::All, |s| Filter::from(s.clone()));
            gallery.apply_filter(&filter)?;
            print_items(gallery.visible_items());
            true
        }
        Some(("search", args)) => {
            let mut gallery = gallery(args)?;
            let term = args.get_one::<String>("term").map_or("", String::as_str);
            gallery.search(term);
            print_items(gallery.visible_items());
            true
        }
        _ => unreachable!("subcommand required"),
    };

    std::process::exit(if ok { 0 } else { 1 });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_for_draft_clear_only_with_autosave() {
        let config = SiteConfig::new();
        assert_eq!(pending_draft_clear(&config), Some(config.draft_clear_delay()));
        assert_eq!(pending_draft_clear(&config.with_autosave(false)), None);
    }

    #[test]
    fn submit_command_parses_fields() {
        let matches = cli()
            .try_get_matches_from(["mlweb", "submit", "--form", "audit", "-f", "website=mlweb.pl"])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        assert_eq!(form_type(args), FormType::Audit);
        assert_eq!(
            field_values(args).unwrap(),
            vec![("website".to_string(), "mlweb.pl".to_string())]
        );
    }
}
