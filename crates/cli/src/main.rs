// Copyright (C) 2026 Athar Huda
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use color_eyre::eyre::eyre;
use khatma::KhatmaStore;
use khatma_domain::{Khatma, NewKhatma, PartStatus};
use khatma_persistence::Persistence;
use std::path::PathBuf;
use time::OffsetDateTime;
use time::macros::format_description;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Khatma - collaborative Quran-reading campaign tracker
#[derive(Debug, Parser)]
#[command(name = "khatma", version, about, long_about = None)]
struct Args {
    /// Directory where snapshots are stored.
    #[arg(long, default_value = "./khatma-data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Create a new khatma
    Create {
        /// Campaign title
        #[arg(long)]
        title: String,
        /// Name of the person opening the campaign
        #[arg(long)]
        created_by: String,
        /// Name of the deceased the reward is dedicated to
        #[arg(long)]
        deceased_name: Option<String>,
        /// Free-text intention or dedication
        #[arg(long)]
        description: String,
        /// Date of death (YYYY-MM-DD)
        #[arg(long)]
        death_date: Option<String>,
    },

    /// List khatmas, optionally filtered
    #[command(visible_alias = "ls")]
    List {
        /// Case-insensitive filter over title, creator and deceased name
        #[arg(long)]
        query: Option<String>,
    },

    /// Show one khatma part by part
    Show {
        /// The khatma identifier
        id: String,
    },

    /// Reserve a Juz under a participant's name
    Reserve {
        /// The khatma identifier
        id: String,
        /// The Juz number (1-30)
        juz: u8,
        /// The participant's name
        #[arg(long)]
        name: String,
    },

    /// Mark a Juz as read
    Complete {
        /// The khatma identifier
        id: String,
        /// The Juz number (1-30)
        juz: u8,
        /// The reader's name; defaults to the reservation holder
        #[arg(long)]
        name: Option<String>,
        /// A Surah the reader finished; repeatable
        #[arg(long = "surah")]
        surahs: Vec<String>,
    },

    /// Return a Juz to the available pool
    Release {
        /// The khatma identifier
        id: String,
        /// The Juz number (1-30)
        juz: u8,
    },

    /// Print the completion log, newest first
    Log,

    /// Print aggregate statistics
    Stats,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    let persistence = Persistence::new_with_dir(&args.data_dir)?;
    let mut store = KhatmaStore::open(persistence);

    match args.command {
        Command::Create {
            title,
            created_by,
            deceased_name,
            description,
            death_date,
        } => {
            let deceased_death_date = death_date.as_deref().map(parse_date).transpose()?;
            let id = store.create_khatma(NewKhatma {
                title,
                created_by,
                deceased_name: deceased_name.filter(|name| !name.trim().is_empty()),
                description,
                deceased_death_date,
            });
            println!("created khatma {id}");
        }
        Command::List { query } => {
            let khatmas = store.search(query.as_deref().unwrap_or_default());
            if khatmas.is_empty() {
                println!("no khatmas found");
            }
            for khatma in khatmas {
                print_summary(khatma);
            }
        }
        Command::Show { id } => match store.khatma(&id) {
            Some(khatma) => print_detail(khatma, &store),
            None => println!("no khatma with id {id}"),
        },
        Command::Reserve { id, juz, name } => {
            report_update(
                store.update_part_status(&id, juz, PartStatus::Reserved, Some(&name), None),
                &id,
                juz,
            );
        }
        Command::Complete {
            id,
            juz,
            name,
            surahs,
        } => {
            let read_surahs = if surahs.is_empty() { None } else { Some(surahs) };
            report_update(
                store.update_part_status(
                    &id,
                    juz,
                    PartStatus::Completed,
                    name.as_deref(),
                    read_surahs,
                ),
                &id,
                juz,
            );
        }
        Command::Release { id, juz } => {
            report_update(
                store.update_part_status(&id, juz, PartStatus::Available, None, None),
                &id,
                juz,
            );
        }
        Command::Log => {
            let log = store.completion_log();
            if log.is_empty() {
                println!("no completed khatmas yet");
            }
            for record in log {
                println!(
                    "{}  {}  by {}  participants: {}",
                    format_timestamp(record.completed_at),
                    record.title,
                    record.created_by,
                    record.participants.join("، ")
                );
            }
        }
        Command::Stats => {
            let stats = store.stats();
            println!("khatmas:      {}", stats.total_khatmas);
            println!("parts read:   {}", stats.completed_parts);
            println!("participants: {}", stats.distinct_participants);
        }
    }

    Ok(())
}

/// Parses a `YYYY-MM-DD` flag into a UTC midnight timestamp.
fn parse_date(value: &str) -> Result<OffsetDateTime> {
    let format = format_description!("[year]-[month]-[day]");
    let date = time::Date::parse(value, &format)
        .map_err(|err| eyre!("invalid date {value:?} (expected YYYY-MM-DD): {err}"))?;
    Ok(date.midnight().assume_utc())
}

fn report_update(applied: bool, id: &str, juz: u8) {
    if applied {
        println!("updated juz {juz} of khatma {id}");
    } else {
        println!("nothing updated: no khatma {id} with juz {juz}");
    }
}

fn print_summary(khatma: &Khatma) {
    let dedication = khatma
        .deceased_name
        .as_deref()
        .map(|name| format!("  for {name}"))
        .unwrap_or_default();
    println!(
        "{}  {}  [{}] {}%{dedication}",
        khatma.id,
        khatma.title,
        khatma.status.as_str(),
        khatma.progress
    );
}

fn print_detail(khatma: &Khatma, store: &KhatmaStore) {
    print_summary(khatma);
    println!("created by {}: {}", khatma.created_by, khatma.description);
    if let Some(completed_at) = khatma.completed_at {
        println!("completed at {}", format_timestamp(completed_at));
    }
    for part in &khatma.parts {
        let juz = part.juz_number.get();
        let holder = match (&part.completed_by, &part.reserved_by) {
            (Some(name), _) => format!("  read by {name}"),
            (None, Some(name)) => format!("  reserved by {name}"),
            (None, None) => String::new(),
        };
        println!(
            "  juz {juz:>2} ({})  {}{holder}",
            store.juz_name(juz),
            part.status.as_str()
        );
    }
    let participants = store.participants(&khatma.id);
    if !participants.is_empty() {
        println!("participants: {}", participants.join("، "));
    }
}

fn format_timestamp(at: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
    at.format(&format)
        .unwrap_or_else(|_| String::from("unknown time"))
}
