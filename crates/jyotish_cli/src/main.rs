use clap::{Parser, Subcommand};
use jyotish_base::{
    ALL_ACTIVITIES, ClockTime, LocalDate, dosha_details, house_significations,
    nakshatra_from_degree, rashi_from_degree,
};
use jyotish_engine::{
    BirthData, calculate_birth_chart, calculate_panchang, find_muhurta, get_daily_recommendations,
};

#[derive(Parser)]
#[command(name = "jyotish", about = "Vedic calculation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from ecliptic longitude
    Rashi {
        /// Ecliptic longitude in degrees
        deg: f64,
    },
    /// Nakshatra from ecliptic longitude
    Nakshatra {
        /// Ecliptic longitude in degrees
        deg: f64,
    },
    /// Full birth chart with dasha balance and doshas
    BirthChart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM)
        #[arg(long)]
        time: String,
        /// Birthplace latitude in degrees
        #[arg(long)]
        lat: f64,
        /// Birthplace longitude in degrees
        #[arg(long)]
        lon: f64,
        /// Timezone label
        #[arg(long, default_value = "UTC")]
        timezone: String,
        /// Year the dasha balance is evaluated for
        #[arg(long)]
        year: i32,
    },
    /// Daily panchang for a date and location
    Panchang {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees
        #[arg(long, default_value = "0")]
        lat: f64,
        /// Longitude in degrees
        #[arg(long, default_value = "0")]
        lon: f64,
        /// Timezone label
        #[arg(long, default_value = "UTC")]
        timezone: String,
    },
    /// Daily activity recommendations
    Recommendations {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees
        #[arg(long, default_value = "0")]
        lat: f64,
        /// Longitude in degrees
        #[arg(long, default_value = "0")]
        lon: f64,
        /// Timezone label
        #[arg(long, default_value = "UTC")]
        timezone: String,
    },
    /// Auspicious windows for an activity
    Muhurta {
        /// Activity id (marriage, travel, business, education)
        #[arg(long)]
        activity: String,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees
        #[arg(long, default_value = "0")]
        lat: f64,
        /// Longitude in degrees
        #[arg(long, default_value = "0")]
        lon: f64,
        /// Timezone label
        #[arg(long, default_value = "UTC")]
        timezone: String,
    },
    /// Details of a dosha by id
    Dosha {
        /// Dosha id (mangal, kaal_sarpa, pitra, shani_sade_sati)
        id: String,
    },
    /// Significations of a house (1-12)
    House {
        /// House number
        number: u8,
    },
    /// List supported muhurta activities
    Activities,
}

fn parse_date(s: &str) -> LocalDate {
    let parsed = (|| {
        let mut it = s.splitn(3, '-');
        let y = it.next()?.parse().ok()?;
        let m = it.next()?.parse().ok()?;
        let d = it.next()?.parse().ok()?;
        LocalDate::new(y, m, d).ok()
    })();
    match parsed {
        Some(date) => date,
        None => {
            eprintln!("Invalid date: {s} (expected YYYY-MM-DD)");
            std::process::exit(1);
        }
    }
}

fn parse_time(s: &str) -> ClockTime {
    match ClockTime::parse(s) {
        Ok(time) => time,
        Err(e) => {
            eprintln!("Invalid time: {s} ({e})");
            std::process::exit(1);
        }
    }
}

fn fmt_date(d: LocalDate) -> String {
    format!("{:04}-{:02}-{:02}", d.year(), d.month(), d.day())
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rashi { deg } => {
            let rashi = rashi_from_degree(deg);
            println!(
                "{} ({}) - {} sign ruled by {}",
                rashi.name(),
                rashi.sanskrit_name(),
                rashi.element().name(),
                rashi.ruler().name()
            );
        }

        Commands::Nakshatra { deg } => {
            let lookup = nakshatra_from_degree(deg);
            if lookup.fallback {
                println!("No nakshatra covers {deg} degrees");
            } else {
                let n = lookup.nakshatra;
                let (start, end) = n.degrees();
                println!(
                    "{} (id {}) - deity {}, ruler {}, spans {start} to {end}",
                    n.name(),
                    n.id(),
                    n.deity(),
                    n.ruler().name()
                );
            }
        }

        Commands::BirthChart {
            date,
            time,
            lat,
            lon,
            timezone,
            year,
        } => {
            let birth = BirthData {
                date: parse_date(&date),
                time: parse_time(&time),
                latitude: lat,
                longitude: lon,
                timezone,
            };
            let chart = calculate_birth_chart(&birth, year);

            let asc_rashi = rashi_from_degree(chart.ascendant);
            println!(
                "Ascendant: {:.2} deg ({})",
                chart.ascendant,
                asc_rashi.name()
            );
            println!();
            for pos in &chart.positions {
                println!(
                    "{:8} {:>7.2} deg  {:12} house {:>2}  {:18}{}",
                    pos.graha.name(),
                    pos.longitude,
                    pos.rashi.name(),
                    pos.house,
                    pos.nakshatra.name(),
                    if pos.retrograde { "  (R)" } else { "" }
                );
            }
            println!();
            let balance = chart.dasha_balance;
            println!(
                "Mahadasha: {} (ends {})",
                balance.major_lord.name(),
                fmt_date(balance.major_end)
            );
            println!(
                "Bhukti:    {} (ends {})",
                balance.sub_lord.name(),
                fmt_date(balance.sub_end)
            );
            if chart.doshas.is_empty() {
                println!("Doshas:    none");
            } else {
                for id in &chart.doshas {
                    match dosha_details(id) {
                        Some(info) => println!("Dosha:     {} - {}", info.name, info.effects),
                        None => println!("Dosha:     {id}"),
                    }
                }
            }
        }

        Commands::Panchang {
            date,
            lat,
            lon,
            timezone,
        } => {
            let p = calculate_panchang(parse_date(&date), lat, lon, &timezone);
            println!("{} ({})", fmt_date(p.date), p.vaar.name());
            println!("Sunrise:   {}   Sunset:  {}", p.sunrise, p.sunset);
            println!("Moonrise:  {}   Moonset: {}", p.moonrise, p.moonset);
            println!(
                "Tithi:     {} {} (ends {})",
                p.tithi.paksha.name(),
                p.tithi.name,
                p.tithi.end_time
            );
            println!(
                "Nakshatra: {} (ends {})",
                p.nakshatra.nakshatra.name(),
                p.nakshatra.end_time
            );
            println!("Yoga:      {} (ends {})", p.yoga.name, p.yoga.end_time);
            println!(
                "Karana:    {} [{}] (ends {})",
                p.karana.name,
                p.karana.nature.name(),
                p.karana.end_time
            );
            println!("Rahu Kalam: {}", p.inauspicious.rahu_kalam);
            println!("Yamaganda:  {}", p.inauspicious.yamaganda);
            println!("Gulika:     {}", p.inauspicious.gulika);
            println!("Auspicious: {}", p.auspicious_periods.join(", "));
            if let Some(observance) = p.special_observance {
                println!("Observance: {observance}");
            }
        }

        Commands::Recommendations {
            date,
            lat,
            lon,
            timezone,
        } => {
            let p = calculate_panchang(parse_date(&date), lat, lon, &timezone);
            for rec in get_daily_recommendations(&p) {
                println!("- {rec}");
            }
        }

        Commands::Muhurta {
            activity,
            date,
            lat,
            lon,
            timezone,
        } => {
            let data = match find_muhurta(&activity, parse_date(&date), lat, lon, &timezone) {
                Ok(data) => data,
                Err(e) => {
                    eprintln!("{e}");
                    eprintln!("Valid activities: marriage, travel, business, education");
                    std::process::exit(1);
                }
            };
            println!(
                "{} on {} - {} window(s)",
                data.activity.name(),
                fmt_date(data.date),
                data.windows.len()
            );
            for w in &data.windows {
                match w.note {
                    Some(note) => println!(
                        "{} - {}  {:9}  {}",
                        w.start_time,
                        w.end_time,
                        w.quality.name(),
                        note
                    ),
                    None => println!("{} - {}  {}", w.start_time, w.end_time, w.quality.name()),
                }
            }
        }

        Commands::Dosha { id } => match dosha_details(&id) {
            Some(info) => {
                println!("{} ({})", info.name, info.sanskrit);
                println!("{}", info.description);
                println!("Effects: {}", info.effects);
                println!("Remedies:");
                for remedy in info.remedies {
                    println!("- {remedy}");
                }
            }
            None => {
                eprintln!("Unknown dosha: {id}");
                eprintln!("Valid: mangal, kaal_sarpa, pitra, shani_sade_sati");
                std::process::exit(1);
            }
        },

        Commands::House { number } => {
            let significations = house_significations(number);
            if significations.is_empty() {
                eprintln!("Invalid house number: {number} (1-12)");
                std::process::exit(1);
            }
            println!("House {number}: {}", significations.join(", "));
        }

        Commands::Activities => {
            for activity in ALL_ACTIVITIES {
                println!("{} - {}", activity.id(), activity.description());
                for requirement in activity.requirements() {
                    println!("    {requirement}");
                }
            }
        }
    }
}
