use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use waymark_core::*;

#[derive(Parser)]
#[command(name = "waymark")]
#[command(about = "Map-click workout logger", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive logging session (default)
    Log {
        /// Start latitude (skips geolocation)
        #[arg(long, requires = "lng")]
        lat: Option<f64>,

        /// Start longitude (skips geolocation)
        #[arg(long, requires = "lat")]
        lng: Option<f64>,

        /// Map zoom level override
        #[arg(long)]
        zoom: Option<u8>,
    },

    /// Estimate the ground distance between two coordinates
    Estimate {
        lat0: f64,
        lng0: f64,
        lat1: f64,
        lng1: f64,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    waymark_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Log { lat, lng, zoom }) => cmd_log(&config, lat, lng, zoom),
        Some(Commands::Estimate {
            lat0,
            lng0,
            lat1,
            lng1,
        }) => cmd_estimate(lat0, lng0, lat1, lng1),
        None => cmd_log(&config, None, None, None),
    }
}

/// Pick the position source: CLI override, then the configured locator
/// file, then the configured fallback, then nothing.
fn resolve_provider(
    config: &Config,
    lat: Option<f64>,
    lng: Option<f64>,
) -> Box<dyn GeolocationProvider> {
    if let (Some(lat), Some(lng)) = (lat, lng) {
        return Box::new(FixedPosition(GeoPoint { lat, lng }));
    }

    if let Some(ref path) = config.geolocation.position_file {
        tracing::debug!("Using position file {:?}", path);
        return Box::new(PositionFile::new(path));
    }

    if let Some(fallback) = config.geolocation.fallback {
        return Box::new(FixedPosition(GeoPoint {
            lat: fallback.lat,
            lng: fallback.lng,
        }));
    }

    Box::new(Unavailable)
}

fn cmd_log(config: &Config, lat: Option<f64>, lng: Option<f64>, zoom: Option<u8>) -> Result<()> {
    let provider = resolve_provider(config, lat, lng);
    let zoom = zoom.unwrap_or(config.map.zoom);
    let formula = config.speed_formula();

    let mut map = MarkerBoard::new();
    let mut session = match Session::start(provider.as_ref(), &mut map, zoom) {
        Ok(session) => session,
        Err(e) => {
            // Without a map there is nothing to click on
            eprintln!("⚠ {}", GEOLOCATION_ALERT);
            return Err(e);
        }
    };

    let reference = session.reference();
    println!(
        "Map centered at ({:.4}, {:.4}), zoom {}",
        reference.lat,
        reference.lng,
        session.zoom()
    );
    println!("Click the map to add a workout.");
    print_commands();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let Some(line) = read_trimmed(&mut input, "map> ")? else {
            break;
        };

        let mut parts = line.split_whitespace();
        match parts.next() {
            None => continue,

            Some("click") => {
                let coords = (
                    parts.next().and_then(|s| s.parse::<f64>().ok()),
                    parts.next().and_then(|s| s.parse::<f64>().ok()),
                );
                let (Some(lat), Some(lng)) = coords else {
                    println!("Usage: click <lat> <lng>");
                    continue;
                };

                session.click(GeoPoint { lat, lng });

                let Some(form) = prompt_form(&mut input)? else {
                    break;
                };

                match session.submit(&form, &mut map, chrono::Utc::now()) {
                    Ok(record) => {
                        println!("✓ {}", popup_text(record));
                        println!("  {}", format_entry(&ListEntry::from_record(record, formula)));
                    }
                    Err(Error::Validation(msg)) => {
                        // The submission is discarded; the form stays open
                        println!("⚠ {}", msg);
                    }
                    Err(e) => return Err(e),
                }
            }

            Some("list") => {
                if session.ledger().is_empty() {
                    println!("No workouts yet.");
                } else {
                    for record in session.ledger().records() {
                        println!("{}", format_entry(&ListEntry::from_record(record, formula)));
                    }
                }
            }

            Some("markers") => {
                if map.markers().is_empty() {
                    println!("No markers yet.");
                } else {
                    for marker in map.markers() {
                        println!(
                            "({:.4}, {:.4}) {} [{}]",
                            marker.at.lat, marker.at.lng, marker.label, marker.popup.class_name
                        );
                    }
                }
            }

            Some("quit") | Some("exit") => break,

            Some(other) => {
                println!("Unknown command: {other}");
                print_commands();
            }
        }
    }

    Ok(())
}

fn cmd_estimate(lat0: f64, lng0: f64, lat1: f64, lng1: f64) -> Result<()> {
    let reference = GeoPoint { lat: lat0, lng: lng0 };
    let target = GeoPoint { lat: lat1, lng: lng1 };
    println!("{:.2} km", estimate_distance_km(reference, target));
    Ok(())
}

fn print_commands() {
    println!("Commands:");
    println!("  click <lat> <lng>   drop a workout at a map point");
    println!("  list                show the workout list");
    println!("  markers             show the placed markers");
    println!("  quit                end the session");
}

/// Print a prompt and read one trimmed line. `None` on end of input.
fn read_trimmed(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Walk the form fields for one submission. The kind selector defaults
/// to running; the cadence and elevation rows toggle with the kind.
fn prompt_form(input: &mut impl BufRead) -> Result<Option<WorkoutForm>> {
    let Some(kind) = read_trimmed(input, "type (running/cycling) [running]: ")? else {
        return Ok(None);
    };
    let kind = if kind.is_empty() { "running".to_string() } else { kind };

    let Some(distance_km) = read_trimmed(input, "distance (km) [map estimate]: ")? else {
        return Ok(None);
    };
    let Some(duration_min) = read_trimmed(input, "duration (min): ")? else {
        return Ok(None);
    };

    let mut form = WorkoutForm {
        kind: kind.clone(),
        distance_km,
        duration_min,
        ..Default::default()
    };

    if kind.eq_ignore_ascii_case("cycling") {
        let Some(elevation_gain_m) = read_trimmed(input, "elevation gain (m): ")? else {
            return Ok(None);
        };
        form.elevation_gain_m = elevation_gain_m;
    } else {
        let Some(cadence_spm) = read_trimmed(input, "cadence (spm): ")? else {
            return Ok(None);
        };
        form.cadence_spm = cadence_spm;
    }

    Ok(Some(form))
}
