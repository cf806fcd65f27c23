// OR Board
// Prints the day board for a JSON list of cases

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use or_board::models::drape::DrapeType;
use or_board::models::surgery::Surgery;
use or_board::services::conflict::conflicting_pairs;
use or_board::services::placement::BoardGeometry;
use or_board::services::projections::{drape_usage, group_by_room, unassigned, visible_in_window};
use or_board::services::schedule::{ScheduleStore, SurgeryFilter};
use or_board::services::settings::SettingsService;
use or_board::utils::date;

const USAGE: &str = "usage: or-board <cases.json> [YYYY-MM-DD]";

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting OR Board");

    let mut args = std::env::args().skip(1);
    let Some(cases_path) = args.next() else {
        bail!(USAGE);
    };
    let requested_date = match args.next() {
        Some(text) => Some(
            date::parse_date(&text).with_context(|| format!("Invalid date '{}'", text))?,
        ),
        None => None,
    };

    let settings = SettingsService::at_default_location()?.load()?;
    let geometry = BoardGeometry::for_scale(settings.time_scale);
    let mut store = ScheduleStore::from_settings(&settings);

    let drafts = read_cases(Path::new(&cases_path))?;
    let first_date = drafts.first().map(|draft| draft.date);
    for draft in drafts {
        let patient = draft.patient_name.clone();
        if let Err(err) = store.create(draft) {
            log::warn!("Skipping case for '{}': {}", patient, err);
        }
    }
    log::info!("Imported {} cases", store.len());

    let day = requested_date.or(first_date).unwrap_or_else(date::today);
    print_board(&store, &geometry, day);
    Ok(())
}

fn read_cases(path: &Path) -> Result<Vec<Surgery>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read cases from {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse cases in {}", path.display()))
}

fn print_board(store: &ScheduleStore, geometry: &BoardGeometry, day: NaiveDate) {
    let todays = store.list(&SurgeryFilter::on(day));
    let visible = visible_in_window(&todays, geometry);

    println!(
        "Lịch mổ {} ({:02}:00 - {:02}:00)",
        day.format("%d/%m/%Y"),
        geometry.start_hour,
        geometry.end_hour
    );
    println!();

    for group in group_by_room(visible.iter().copied(), store.rooms()) {
        let marker = if group.has_conflicts() { " !" } else { "" };
        println!("{}{}", group.room.name, marker);
        for surgery in &group.surgeries {
            println!(
                "  {} {} {} - {} [{}]{}",
                if surgery.is_conflicting { "!" } else { " " },
                surgery.interval(),
                surgery.patient_name,
                surgery.procedure,
                surgery.department,
                surgery
                    .drape
                    .as_ref()
                    .map(|drape| format!(" ({})", drape))
                    .unwrap_or_default()
            );
        }
    }

    let pairs = conflicting_pairs(&todays);
    if !pairs.is_empty() {
        println!();
        println!("Trùng lịch:");
        for (first, second) in pairs {
            println!(
                "  {} ({}) / {} ({})",
                first.patient_name,
                first.interval(),
                second.patient_name,
                second.interval()
            );
        }
    }

    let waiting = unassigned(&todays, day);
    if !waiting.is_empty() {
        println!();
        println!("Chưa xếp phòng:");
        for surgery in waiting {
            println!("  {} - {} [{}]", surgery.patient_name, surgery.procedure, surgery.department);
        }
    }

    let usage = drape_usage(&todays, store.rooms());
    if !usage.totals.is_empty() {
        println!();
        println!("Săng sử dụng:");
        for entry in usage.rooms.iter().filter(|entry| !entry.usage.is_empty()) {
            let mut parts: Vec<String> = DrapeType::ALL
                .iter()
                .filter(|drape| entry.usage.count(**drape) > 0)
                .map(|drape| format!("{} x{}", drape, entry.usage.count(*drape)))
                .collect();
            parts.extend(entry.usage.others.iter().map(|other| format!("Khác: {}", other)));
            println!("  {}: {}", entry.room.name, parts.join(", "));
        }
        println!("  Tổng: {}", usage.totals.total());
    }
}
