//! Terminal panels for the CLI.
//!
//! Every `*_lines` function builds the content of a panel as `(text, color)` pairs;
//! [`print_panel`] draws it. When a colored line contains `:`, only the part after
//! the first colon is colored.

use crate::markup::pretty_print_number;
use crate::models::{
    Assignment, Campaign, Dispatch, Faction, GalaxyStatistics, MajorOrderType, Planet,
    PlanetStatistics, PlanetStatus, RewardType, SteamNews, Update, WarInfo, WarStatus,
};
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::stdout;

pub type PanelLine = (String, Option<Color>);

const TEXT_COLOR: Color = Color::AnsiValue(231);
const HEADER_COLOR: Color = Color::AnsiValue(51);
const PROGRESS_COLOR: Color = Color::AnsiValue(46);
const WARNING_COLOR: Color = Color::AnsiValue(226);
const WRAP_WIDTH: usize = 72;
const DATE_FORMAT: &str = "%d-%b-%Y %H:%M UTC";
const MAJOR_ORDER_MARK: &str = " [MO]";

/// Prints a dynamic-width box. The first line is the title and is followed by a separator.
pub fn print_panel(lines: &[PanelLine]) {
    let max_content_width = lines
        .iter()
        .map(|(l, _)| l.chars().count())
        .max()
        .unwrap_or(0);
    let border = format!("╔{:═<width$}╗", "", width = max_content_width + 2);
    let sep = format!("╠{:═<width$}╣", "", width = max_content_width + 2);
    let bottom = format!("╚{:═<width$}╝", "", width = max_content_width + 2);

    execute!(stdout(), SetForegroundColor(TEXT_COLOR), Print(format!("{border}\n"))).ok();

    for (i, (line, color)) in lines.iter().enumerate() {
        let padded = format!("║ {line:<max_content_width$} ║");
        match color {
            Some(c) => {
                if let Some((pre, col)) = line.split_once(':') {
                    let pre = format!("║ {pre}:");
                    let used = line.chars().count();
                    let pad = max_content_width - used;
                    execute!(
                        stdout(),
                        SetForegroundColor(TEXT_COLOR),
                        Print(pre),
                        SetForegroundColor(*c),
                        Print(col),
                        SetForegroundColor(TEXT_COLOR),
                        Print(format!("{:pad$} ║\n", "", pad = pad)),
                    )
                    .ok();
                } else {
                    execute!(
                        stdout(),
                        SetForegroundColor(*c),
                        Print(padded),
                        SetForegroundColor(TEXT_COLOR),
                        Print("\n")
                    )
                    .ok();
                }
            }
            None => {
                execute!(stdout(), SetForegroundColor(TEXT_COLOR), Print(padded), Print("\n")).ok();
            }
        }
        if i == 0 && lines.len() > 1 {
            execute!(stdout(), Print(format!("{sep}\n"))).ok();
        }
    }

    execute!(stdout(), Print(format!("{bottom}\n")), ResetColor).ok();
}

pub fn faction_color(faction: Option<Faction>) -> Color {
    match faction {
        Some(Faction::Humans) => Color::AnsiValue(39),
        Some(Faction::Terminids) => Color::AnsiValue(214),
        Some(Faction::Automaton) => Color::AnsiValue(196),
        Some(Faction::Illuminate) => Color::AnsiValue(135),
        Some(Faction::Any) | None => TEXT_COLOR,
    }
}

fn title(text: impl Into<String>) -> PanelLine {
    (text.into(), Some(HEADER_COLOR))
}

fn plain(text: impl Into<String>) -> PanelLine {
    (text.into(), None)
}

fn blank() -> PanelLine {
    plain("")
}

fn major_order_mark(planet: &Planet, major_order_planets: &[i32]) -> &'static str {
    if major_order_planets.contains(&planet.index) {
        MAJOR_ORDER_MARK
    } else {
        ""
    }
}

fn count(value: u64) -> String {
    pretty_print_number(i64::try_from(value).unwrap_or(i64::MAX))
}

/// Greedy word wrap; words longer than `width` get a line of their own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut wrapped = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > width && !current.is_empty() {
                wrapped.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        wrapped.push(current);
    }

    wrapped
}

fn wrapped_lines(text: &str) -> impl Iterator<Item = PanelLine> {
    wrap_text(text, WRAP_WIDTH).into_iter().map(plain)
}

/// Campaigns by player count. Planets in `major_order_planets` are marked `[MO]`.
pub fn campaign_lines(campaigns: &[Campaign], major_order_planets: &[i32]) -> Vec<PanelLine> {
    let mut lines = vec![title(format!("Active Campaigns ({})", campaigns.len()))];
    if campaigns.is_empty() {
        lines.push(plain("No active campaigns"));
        return lines;
    }

    let mut sorted: Vec<&Campaign> = campaigns.iter().collect();
    sorted.sort_by(|a, b| b.planet.players().cmp(&a.planet.players()));

    for campaign in sorted {
        let planet = &campaign.planet;
        let defense = if planet.event.is_some() { " [DEFENSE]" } else { "" };
        lines.push((
            format!(
                "{:<20} {:>6.2}% {:>7} players: {}{defense}{}",
                planet.name,
                campaign.liberation_percentage(),
                count(planet.players()),
                planet.owner().map(|f| f.name()).unwrap_or(planet.current_owner.as_str()),
                major_order_mark(planet, major_order_planets),
            ),
            Some(faction_color(planet.owner())),
        ));
    }
    lines
}

pub fn dispatch_lines(dispatch: &Dispatch) -> Vec<PanelLine> {
    let mut lines = vec![title(format!(
        "Dispatch #{} - {}",
        dispatch.id,
        dispatch.published.format(DATE_FORMAT)
    ))];
    lines.extend(wrapped_lines(&dispatch.as_plaintext()));
    lines
}

/// Names the task's planets as "Name (Sector) 45.00%" using the campaign for each
/// planet. Planets without an active campaign fall back to their index.
fn task_planets(planet_indices: &[i64], campaigns: &[Campaign]) -> String {
    if planet_indices.is_empty() {
        return "planets".to_string();
    }

    planet_indices
        .iter()
        .map(|index| {
            match campaigns
                .iter()
                .find(|c| i64::from(c.planet.index) == *index)
            {
                Some(campaign) => format!(
                    "{} ({}) {:.2}%",
                    campaign.planet.name,
                    campaign.planet.sector,
                    campaign.liberation_percentage()
                ),
                None => format!("planet #{index}"),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn task_description(assignment: &Assignment, index: usize, campaigns: &[Campaign]) -> String {
    let Some(task) = assignment.tasks.get(index) else {
        return String::new();
    };
    let values = task.decoded();
    let progress = assignment.progress.get(index).copied().unwrap_or(0);
    let done = if assignment.is_task_complete(index) { "x" } else { " " };

    let description = match task.kind() {
        Some(MajorOrderType::Eradicate) => format!(
            "Eradicate {}: {} / {}",
            values.race.map(|f| f.name()).unwrap_or("enemies"),
            pretty_print_number(progress),
            values.goal.map(pretty_print_number).unwrap_or_else(|| "?".to_string()),
        ),
        Some(MajorOrderType::Liberation) => {
            format!("Liberate {}", task_planets(&values.planet_indices, campaigns))
        }
        Some(MajorOrderType::Defense) => {
            format!("Defend {}", task_planets(&values.planet_indices, campaigns))
        }
        Some(MajorOrderType::Control) => {
            format!("Hold {}", task_planets(&values.planet_indices, campaigns))
        }
        None => format!("Task type {} values {:?}", task.task_type, task.values),
    };

    format!("[{done}] {description}")
}

/// Major order panel. `campaigns` resolves task planets to names and progress.
pub fn major_order_lines(assignment: &Assignment, campaigns: &[Campaign]) -> Vec<PanelLine> {
    let mut lines = vec![title(
        assignment
            .title
            .clone()
            .unwrap_or_else(|| "MAJOR ORDER".to_string()),
    )];

    if let Some(briefing) = &assignment.briefing {
        lines.extend(wrapped_lines(briefing));
    }
    if let Some(description) = assignment.description.as_ref().filter(|d| !d.is_empty()) {
        lines.push(blank());
        lines.extend(wrapped_lines(description));
    }

    lines.push(blank());
    for index in 0..assignment.tasks.len() {
        let color = if assignment.is_task_complete(index) {
            PROGRESS_COLOR
        } else {
            WARNING_COLOR
        };
        lines.push((task_description(assignment, index, campaigns), Some(color)));
    }

    lines.push(blank());
    if let Some(reward) = &assignment.reward {
        let kind = match reward.kind() {
            Some(RewardType::Medals) => "Medals".to_string(),
            None => format!("type {}", reward.reward_type),
        };
        lines.push((format!("Reward: {} {kind}", reward.amount), Some(PROGRESS_COLOR)));
    }
    lines.push(plain(format!(
        "Expires: {}",
        assignment.expiration.format(DATE_FORMAT)
    )));
    lines
}

pub fn planet_table_lines(planets: &[Planet], major_order_planets: &[i32]) -> Vec<PanelLine> {
    let mut lines = vec![title(format!("Planets ({})", planets.len()))];
    for planet in planets.iter().filter(|p| !p.disabled) {
        lines.push((
            format!(
                "{:>3} {:<22} {:>6.2}% {:>7}: {}{}",
                planet.index,
                planet.name,
                planet.liberation_percentage(),
                count(planet.players()),
                planet.current_owner,
                major_order_mark(planet, major_order_planets),
            ),
            Some(faction_color(planet.owner())),
        ));
    }
    lines
}

pub fn planet_detail_lines(
    planet: &Planet,
    status: Option<&PlanetStatus>,
    major_order_planets: &[i32],
) -> Vec<PanelLine> {
    let mut lines = vec![title(format!(
        "{} (#{}){}",
        planet.name,
        planet.index,
        major_order_mark(planet, major_order_planets)
    ))];
    lines.push(plain(format!("Sector: {}", planet.sector)));
    lines.push((
        format!("Owner: {}", planet.current_owner),
        Some(faction_color(planet.owner())),
    ));
    lines.push((
        format!("Liberation: {:.2}%", planet.liberation_percentage()),
        Some(PROGRESS_COLOR),
    ));
    lines.push(plain(format!(
        "Health: {} / {}",
        pretty_print_number(planet.health),
        pretty_print_number(planet.max_health)
    )));
    lines.push(plain(format!("Players: {}", count(planet.players()))));
    if let Some(biome) = &planet.biome {
        lines.push(plain(format!("Biome: {}", biome.name)));
    }
    if !planet.hazards.is_empty() {
        let hazards: Vec<&str> = planet.hazards.iter().map(|h| h.name.as_str()).collect();
        lines.push(plain(format!("Hazards: {}", hazards.join(", "))));
    }
    if let Some(event) = &planet.event {
        lines.push((
            format!(
                "Defense: {} attacking, {} / {}",
                event.faction,
                pretty_print_number(event.health),
                pretty_print_number(event.max_health)
            ),
            Some(WARNING_COLOR),
        ));
    }
    if let Some(status) = status {
        lines.push(plain(format!(
            "Regeneration: {:.2} HP/s",
            status.regen_per_second
        )));
    }
    lines
}

pub fn galaxy_statistics_lines(stats: &GalaxyStatistics) -> Vec<PanelLine> {
    let mut lines = vec![title("Galaxy Statistics")];
    lines.extend(statistic_rows(stats));
    lines
}

pub fn planet_statistics_lines(name: &str, stats: &PlanetStatistics) -> Vec<PanelLine> {
    let mut lines = vec![title(format!("{name} (#{}) Statistics", stats.planet_index))];
    lines.extend(statistic_rows(&stats.stats));
    lines
}

fn statistic_rows(stats: &GalaxyStatistics) -> Vec<PanelLine> {
    let mut rows: Vec<PanelLine> = stats
        .rows()
        .into_iter()
        .map(|(label, value)| plain(format!("{label:<18} {:>10}", count(value))))
        .collect();
    rows.push((
        format!("Success Rate: {}%", stats.mission_success_rate),
        Some(PROGRESS_COLOR),
    ));
    rows.push((format!("Accuracy: {}%", stats.accuracy), Some(PROGRESS_COLOR)));
    rows
}

pub fn update_lines(update: &Update) -> Vec<PanelLine> {
    let date = update
        .parsed_date()
        .map(|d| d.format("%d-%b-%Y %H:%M").to_string())
        .unwrap_or_else(|| update.date.clone());
    let mut lines = vec![title(update.title.clone())];
    lines.push(plain(format!("Published: {date}")));
    lines.push(plain(update.url.clone()));
    let contents = update.contents_plaintext();
    if !contents.trim().is_empty() {
        lines.push(blank());
        lines.extend(wrapped_lines(&contents));
    }
    lines
}

pub fn update_list_lines(updates: &[Update]) -> Vec<PanelLine> {
    let mut lines = vec![title(format!("Updates ({})", updates.len()))];
    for update in updates.iter().rev() {
        lines.push(plain(format!("{:<18} {}", update.date, update.title)));
    }
    lines
}

pub fn war_lines(war: &WarInfo, status: &WarStatus) -> Vec<PanelLine> {
    let stats = &war.statistics;
    let mut lines = vec![title(format!("Galactic War #{}", status.war_id))];
    lines.push(plain(format!("Started: {}", war.started.format(DATE_FORMAT))));
    lines.push(plain(format!("Now: {}", war.now.format(DATE_FORMAT))));
    lines.push(plain(format!("Client Version: {}", war.client_version)));
    lines.push(plain(format!(
        "Impact Multiplier: {:.5}",
        status.impact_multiplier
    )));
    lines.push((
        format!("Players Online: {}", count(status.total_players())),
        Some(PROGRESS_COLOR),
    ));
    lines.push(plain(format!("Active Campaigns: {}", status.campaigns.len())));
    lines.push(blank());
    for faction in war.parsed_factions() {
        lines.push((format!("Faction: {faction}"), Some(faction_color(Some(faction)))));
    }
    lines.push(blank());
    lines.push(plain(format!(
        "Missions Won / Lost: {} / {}",
        count(stats.missions_won),
        count(stats.missions_lost)
    )));
    lines.push(plain(format!("Deaths: {}", count(stats.deaths))));
    lines
}

pub fn steam_news_lines(news: &[SteamNews]) -> Vec<PanelLine> {
    let mut lines = vec![title(format!("Steam News ({})", news.len()))];
    for entry in news {
        lines.push(plain(format!(
            "{}  {}",
            entry.published_at.format("%d-%b-%Y"),
            entry.title
        )));
    }
    lines
}
