use crate::api::ApiClient;
use crate::cli::{Command, ConfigArgs};
use crate::config::Config;
use crate::display::{self, print_panel};
use crate::error::AppError;
use crate::models::{Assignment, DispatchOrder};
use std::path::Path;
use tracing::info;

/// Runs a subcommand against the configured endpoints.
///
/// The HTTP client is only built for commands that talk to the APIs.
pub async fn run(command: &Command, config: &Config) -> Result<(), AppError> {
    info!("Running {command:?}");

    match command {
        Command::Config(config_args) => handle_config_command(config_args).await,
        Command::Campaigns => handle_campaigns(&api_client(config)?).await,
        Command::News { latest } => handle_news(&api_client(config)?, *latest).await,
        Command::Mo => handle_major_order(&api_client(config)?).await,
        Command::Planets { id } => handle_planets(&api_client(config)?, *id).await,
        Command::Stats { planet } => handle_stats(&api_client(config)?, *planet).await,
        Command::Updates { latest } => handle_updates(&api_client(config)?, *latest).await,
        Command::War => handle_war(&api_client(config)?).await,
        Command::Steam => handle_steam(&api_client(config)?).await,
    }
}

fn api_client(config: &Config) -> Result<ApiClient, AppError> {
    ApiClient::from_config(config)
}

/// Planet indices named by the current major order, if there is one.
fn major_order_planets(major_order: Option<&Assignment>) -> Vec<i32> {
    major_order.map(Assignment::planet_indices).unwrap_or_default()
}

async fn handle_campaigns(client: &ApiClient) -> Result<(), AppError> {
    let campaigns = client.campaigns();
    let assignments = client.assignments();
    let (campaigns, major_order) =
        futures::try_join!(campaigns.get_campaigns(), assignments.get_major_order())?;
    print_panel(&display::campaign_lines(
        &campaigns,
        &major_order_planets(major_order.as_ref()),
    ));
    Ok(())
}

async fn handle_news(client: &ApiClient, latest: bool) -> Result<(), AppError> {
    if latest {
        match client.dispatches().get_latest_dispatch().await? {
            Some(dispatch) => print_panel(&display::dispatch_lines(&dispatch)),
            None => println!("No dispatches published yet."),
        }
        return Ok(());
    }

    let dispatches = client
        .dispatches()
        .get_dispatches(DispatchOrder::NewestFirst)
        .await?;
    if dispatches.is_empty() {
        println!("No dispatches published yet.");
    }
    for dispatch in &dispatches {
        print_panel(&display::dispatch_lines(dispatch));
    }
    Ok(())
}

async fn handle_major_order(client: &ApiClient) -> Result<(), AppError> {
    let assignments = client.assignments();
    let campaigns = client.campaigns();
    let (major_order, campaigns) =
        futures::try_join!(assignments.get_major_order(), campaigns.get_campaigns())?;
    match major_order {
        Some(assignment) => print_panel(&display::major_order_lines(&assignment, &campaigns)),
        None => println!("No active major order."),
    }
    Ok(())
}

async fn handle_planets(client: &ApiClient, index: Option<i32>) -> Result<(), AppError> {
    let planets = client.planets();
    let assignments = client.assignments();

    let Some(index) = index else {
        let (planets, major_order) =
            futures::try_join!(planets.get_planets(), assignments.get_major_order())?;
        print_panel(&display::planet_table_lines(
            &planets,
            &major_order_planets(major_order.as_ref()),
        ));
        return Ok(());
    };

    let status = client.status();
    let (planet, planet_status, major_order) = futures::try_join!(
        planets.get_planet(index),
        status.get_planet_status(index),
        assignments.get_major_order()
    )?;
    print_panel(&display::planet_detail_lines(
        &planet,
        planet_status.as_ref(),
        &major_order_planets(major_order.as_ref()),
    ));
    Ok(())
}

async fn handle_stats(client: &ApiClient, planet: Option<i32>) -> Result<(), AppError> {
    let Some(index) = planet else {
        let galaxy = client.statistics().get_galaxy_statistics().await?;
        print_panel(&display::galaxy_statistics_lines(&galaxy));
        return Ok(());
    };

    let statistics = client.statistics();
    let planets = client.planets();
    let (stats, planet) = futures::try_join!(
        statistics.get_planet_statistics(index),
        planets.get_planet(index)
    )?;

    match stats {
        Some(stats) => print_panel(&display::planet_statistics_lines(&planet.name, &stats)),
        None => println!("No statistics recorded for {} (#{index}).", planet.name),
    }
    Ok(())
}

async fn handle_updates(client: &ApiClient, latest: bool) -> Result<(), AppError> {
    if latest {
        match client.updates().get_latest_update().await? {
            Some(update) => print_panel(&display::update_lines(&update)),
            None => println!("No updates published yet."),
        }
        return Ok(());
    }

    let updates = client.updates().get_updates().await?;
    print_panel(&display::update_list_lines(&updates));
    Ok(())
}

async fn handle_war(client: &ApiClient) -> Result<(), AppError> {
    let war = client.war();
    let status = client.status();
    let (war_info, war_status) = futures::try_join!(war.get_war_info(), status.get_status())?;
    print_panel(&display::war_lines(&war_info, &war_status));
    Ok(())
}

async fn handle_steam(client: &ApiClient) -> Result<(), AppError> {
    let news = client.steam().get_all_steam_news().await?;
    print_panel(&display::steam_news_lines(&news));
    Ok(())
}

/// Lists the configuration, or applies the requested changes and saves them.
///
/// Changes are applied to the stored file, so environment overrides never end
/// up persisted.
pub async fn handle_config_command(args: &ConfigArgs) -> Result<(), AppError> {
    if !args.has_changes() {
        return Config::display().await;
    }

    let config_path = Config::get_config_path();
    let config = load_stored_config(&config_path).await?;
    let updated = apply_config_changes(config, args);
    updated.validate()?;
    updated.save_to_path(&config_path).await?;

    println!("Configuration saved to {config_path}");
    Ok(())
}

async fn load_stored_config(path: &str) -> Result<Config, AppError> {
    if Path::new(path).exists() {
        Config::load_from_path(path).await
    } else {
        Ok(Config::default())
    }
}

fn apply_config_changes(mut config: Config, args: &ConfigArgs) -> Config {
    if let Some(url) = &args.community_url {
        config.community_url = url.clone();
    }
    if let Some(url) = &args.diveharder_url {
        config.diveharder_url = url.clone();
    }
    if let Some(user_agent) = &args.user_agent {
        config.user_agent = user_agent.clone();
    }
    if let Some(contact) = &args.user_contact {
        config.user_contact = Some(contact.clone()).filter(|c| !c.trim().is_empty());
    }
    if let Some(path) = &args.log_file_path {
        config.log_file_path = Some(path.clone());
    }
    if args.clear_log_file_path {
        config.log_file_path = None;
    }
    if let Some(timeout) = args.http_timeout_seconds {
        config.http_timeout_seconds = timeout;
    }
    config
}
