use avcalc::atmosphere::{temperature_model_ceiling_ft, temperature_model_floor_ft};
use avcalc::constants::PRESSURE_MODEL_CEILING_FT;
use avcalc::*;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::error::Error;

#[derive(Parser)]
#[command(name = "avcalc")]
#[command(author = "Arild M Johannessen")]
#[command(version = "0.1.0")]
#[command(about = "Great-circle navigation and standard atmosphere calculator", long_about = None)]
struct Cli {
    /// Output format
    #[arg(short = 'o', long, global = true, default_value = "table")]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Great-circle distance between two points (nautical miles)
    Distance {
        /// Start point as LAT,LON in degrees (east positive)
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        from: GeoPoint,

        /// End point as LAT,LON in degrees (east positive)
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        to: GeoPoint,
    },

    /// Initial true course from one point toward another (degrees)
    Course {
        /// Start point as LAT,LON in degrees
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        from: GeoPoint,

        /// End point as LAT,LON in degrees
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        to: GeoPoint,
    },

    /// Point a fraction of the way along the great circle
    Intermediate {
        /// Start point as LAT,LON in degrees
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        from: GeoPoint,

        /// End point as LAT,LON in degrees
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        to: GeoPoint,

        /// Fraction of the route, 0 = start, 1 = end
        #[arg(short = 'f', long, default_value = "0.5")]
        fraction: f64,
    },

    /// Standard temperature at a pressure altitude (°C)
    Temperature {
        /// Pressure altitude (ft)
        #[arg(allow_negative_numbers = true)]
        altitude: f64,
    },

    /// Standard pressure at a pressure altitude (Pa)
    Pressure {
        /// Pressure altitude (ft)
        #[arg(allow_negative_numbers = true)]
        altitude: f64,
    },

    /// Standard density at a pressure altitude (slug/ft³)
    Density {
        /// Pressure altitude (ft)
        #[arg(allow_negative_numbers = true)]
        altitude: f64,

        /// Outside air temperature (°C), accepted but not used by the standard-day model
        #[arg(long, default_value = "15.0", allow_negative_numbers = true)]
        oat: f64,
    },

    /// Speed of sound at an outside air temperature (ft/s)
    SpeedOfSound {
        /// Outside air temperature (°C)
        #[arg(allow_negative_numbers = true)]
        oat: f64,
    },

    /// Run the built-in examples
    Demo,

    /// Display the standard atmosphere band table
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Serialize)]
struct Field {
    name: &'static str,
    value: f64,
    unit: &'static str,
}

#[derive(Debug, Serialize)]
struct Report {
    title: String,
    fields: Vec<Field>,
}

impl Report {
    fn new(title: impl Into<String>) -> Self {
        Report { title: title.into(), fields: Vec::new() }
    }

    fn field(mut self, name: &'static str, value: f64, unit: &'static str) -> Self {
        self.fields.push(Field { name, value, unit });
        self
    }
}

fn parse_point(s: &str) -> Result<GeoPoint, String> {
    let (lat, lon) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON but got '{s}'"))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("invalid latitude '{lat}': {e}"))?;
    let lon: f64 = lon.trim().parse().map_err(|e| format!("invalid longitude '{lon}': {e}"))?;
    if !(-90.0..=90.0).contains(&lat) {
        return Err(format!("latitude {lat} outside [-90, 90]"));
    }
    Ok(GeoPoint::new(lat, lon))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("command: {:?}", cli.command);

    let reports = match cli.command {
        Commands::Distance { from, to } => {
            vec![route_report("DISTANCE", &from, &to).field("Distance", distance(&from, &to), "nm")]
        },

        Commands::Course { from, to } => {
            vec![route_report("INITIAL COURSE", &from, &to).field("Course", initial_course(&from, &to), "deg")]
        },

        Commands::Intermediate { from, to, fraction } => {
            let waypoint = try_intermediate_point(&from, &to, fraction)?;
            vec![route_report("INTERMEDIATE POINT", &from, &to)
                .field("Fraction", fraction, "")
                .field("Waypoint lat", waypoint.lat, "deg")
                .field("Waypoint lon", waypoint.lon, "deg")]
        },

        Commands::Temperature { altitude } => {
            let t = standard_temperature(altitude);
            if t.is_nan() {
                log::warn!(
                    "{} ft outside the temperature model [{:.2}, {:.2}] ft",
                    altitude,
                    temperature_model_floor_ft(),
                    temperature_model_ceiling_ft()
                );
            }
            vec![Report::new("STANDARD TEMPERATURE")
                .field("Altitude", altitude, "ft")
                .field("Temperature", t, "C")]
        },

        Commands::Pressure { altitude } => {
            let p = pressure_at_altitude(altitude);
            warn_above_pressure_ceiling(altitude);
            vec![Report::new("STANDARD PRESSURE")
                .field("Altitude", altitude, "ft")
                .field("Pressure", p, "Pa")]
        },

        Commands::Density { altitude, oat } => {
            let rho = density_at_altitude(altitude, oat);
            warn_above_pressure_ceiling(altitude);
            vec![Report::new("STANDARD DENSITY")
                .field("Altitude", altitude, "ft")
                .field("OAT", oat, "C")
                .field("Density", rho, "sl/ft3")]
        },

        Commands::SpeedOfSound { oat } => {
            vec![Report::new("SPEED OF SOUND")
                .field("OAT", oat, "C")
                .field("Speed of sound", speed_of_sound(oat), "ft/s")]
        },

        Commands::Demo => demo_reports(),

        Commands::Info => {
            display_info(cli.output)?;
            return Ok(());
        },
    };

    for report in &reports {
        display_report(report, cli.output)?;
    }

    Ok(())
}

fn route_report(title: &str, from: &GeoPoint, to: &GeoPoint) -> Report {
    Report::new(title)
        .field("From lat", from.lat, "deg")
        .field("From lon", from.lon, "deg")
        .field("To lat", to.lat, "deg")
        .field("To lon", to.lon, "deg")
}

fn warn_above_pressure_ceiling(altitude: f64) {
    if altitude >= PRESSURE_MODEL_CEILING_FT {
        log::warn!(
            "{} ft at or above the pressure model ceiling of {} ft, result is the -1 sentinel",
            altitude,
            PRESSURE_MODEL_CEILING_FT
        );
    }
}

fn demo_reports() -> Vec<Report> {
    let lax = GeoPoint::new(33.95, -118.4);
    let jfk = GeoPoint::new(40.633333, -73.783333);

    vec![
        route_report("EXAMPLE 1: DISTANCE LAX TO JFK", &lax, &jfk).field("Distance", distance(&lax, &jfk), "nm"),
        route_report("EXAMPLE 2: INITIAL COURSE", &lax, &jfk).field("Course", initial_course(&lax, &jfk), "deg"),
        Report::new("EXAMPLE 3: SPEED OF SOUND")
            .field("OAT", -6.72, "C")
            .field("Speed of sound", speed_of_sound(-6.72), "ft/s"),
        Report::new("EXAMPLE 4: STANDARD TEMPERATURE")
            .field("Altitude", 152000.0, "ft")
            .field("Temperature", standard_temperature(152000.0), "C"),
    ]
}

fn display_report(report: &Report, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        },

        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║ {:<38} ║", report.title);
            println!("╠════════════════════════════════════════╣");
            for f in &report.fields {
                println!("║ {:<16} {:>13.4} {:<7} ║", f.name, f.value, f.unit);
            }
            println!("╚════════════════════════════════════════╝");
        },
    }

    Ok(())
}

fn display_info(format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let bands = standard_atmosphere_bands();

    match format {
        OutputFormat::Json => {
            let rows: Vec<_> = bands
                .iter()
                .map(|b| {
                    serde_json::json!({
                        "lower_ft": b.lower_ft,
                        "lapse_rate_c_per_ft": b.lapse_rate,
                        "anchor_temp_c": b.anchor_temp_c,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        },

        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║      AVCALC v0.1.0                     ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Aviation Formulary great-circle and    ║");
            println!("║ ICAO standard atmosphere calculations. ║");
            println!("╚════════════════════════════════════════╝");
            println!();
            println!("┌──────────────┬──────────────┬──────────┐");
            println!("│  Base (ft)   │ Lapse (C/kft)│ Base (C) │");
            println!("├──────────────┼──────────────┼──────────┤");
            for b in bands {
                println!("│ {:>12.2} │ {:>12.3} │ {:>8.3} │", b.lower_ft, b.lapse_rate * 1000.0, b.anchor_temp_c);
            }
            println!("└──────────────┴──────────────┴──────────┘");
        },
    }

    Ok(())
}
