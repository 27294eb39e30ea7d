use std::{fs::File, io::Write, path::PathBuf};

use activity_report::{ActivityReport, ReportOptions};
use activity_stats::{Activity, Totals, heart_rate_overview};
use fastest_segment::format_duration;
use heart_rate::ZoneOptions;
use pace::format_pace;
use stream::{StreamKind, StreamPayload, StreamSet};

#[derive(Debug, serde::Serialize)]
struct ZoneRow {
    activity_id: String,
    zone: u8,
    samples: usize,
    seconds: f64,
    percent: f64,
}

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Streams json file: the provider's stream map, bare or under a `streams` key
    #[arg(default_value_os_t = std::env::current_dir().unwrap_or_default().join("streams.json"), required = false)]
    pub input: PathBuf,
    /// Activity the streams belong to
    #[arg(short, long, default_value = "unknown")]
    pub activity_id: String,
    /// Maximum heart rate used for zones
    #[arg(short, long, default_value_t = heart_rate::DEFAULT_MAX_HEART_RATE)]
    pub max_heart_rate: f64,
    /// Points kept per chart series
    #[arg(long, default_value_t = stream::MAX_CHART_POINTS)]
    pub max_points: usize,
    /// Write time in zones to this csv file. _Note_: will truncate old file if exists
    #[arg(long)]
    pub zones_csv: Option<PathBuf>,
    /// Activity history json file, adds totals and heart-rate overview
    #[arg(long)]
    pub activities: Option<PathBuf>,
    /// Print the full report as json to stdout
    #[arg(short, long, default_value_t = false, required = false)]
    pub print: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Args {
        input,
        activity_id,
        max_heart_rate,
        max_points,
        zones_csv,
        activities,
        print,
    } = <Args as clap::Parser>::parse();

    let streams = serde_json::from_reader::<_, StreamPayload>(
        File::open(&input).map_err(|e| format!("Failed to read input file. Reason: {e}"))?,
    )
    .map(StreamSet::from)
    .map_err(|e| format!("Failed to parse streams. Reason: {e}"))?;

    let samples = streams.require(StreamKind::Distance).map(|this| this.len()).unwrap_or_default();
    tracing::info!(input = %input.display(), samples, "streams loaded");

    let options = ReportOptions::new()
        .set_zones(ZoneOptions::new().set_max_heart_rate(max_heart_rate))
        .set_max_chart_points(max_points);

    let report = ActivityReport::build(activity_id, &streams, &options)?;

    let mut io = std::io::stdout().lock();

    if let Some(segments) = &report.segments {
        for stat in segments {
            let pace = stat.pace_min_per_km().map(format_pace).unwrap_or_else(|| "-".to_owned());
            writeln!(
                io,
                "{:?}: {:.2} km, {pace}",
                stat.category,
                stat.distance_meters / 1000.0
            )?;
        }
    }

    for record in &report.fastest {
        writeln!(
            io,
            "Best {} km: {}",
            record.target_distance_meters / 1000.0,
            format_duration(record.elapsed_samples as f64)
        )?;
    }

    if let Some(average) = report.average_heart_rate {
        writeln!(io, "Average heart rate: {average:.0} bpm")?;
    }

    if let Some(path) = activities {
        let activities = serde_json::from_reader::<_, Vec<Activity>>(
            File::open(&path).map_err(|e| format!("Failed to read activities. Reason: {e}"))?,
        )
        .map_err(|e| format!("Failed to parse activities. Reason: {e}"))?;

        let totals = activities.iter().collect::<Totals>();
        writeln!(
            io,
            "{} activities: {:.2} km, {:.0} m, {:.1} h",
            totals.count, totals.distance_km, totals.elevation_m, totals.moving_hours
        )?;

        if let Some(overview) = heart_rate_overview(&activities) {
            writeln!(
                io,
                "Heart rate across activities: {:.0} bpm average, {} bpm max",
                overview.average_heartrate, overview.max_heartrate
            )?;
        }
    }

    if print {
        serde_json::to_writer_pretty(&mut io, &report)?;
        writeln!(io)?;
    }

    if let (Some(path), Some(zones)) = (zones_csv, &report.zones) {
        let mut wrt = csv::Writer::from_path(&path)
            .map_err(|e| format!("Failed to create zones file. Reason: {e}"))?;

        for zone in &zones.zones {
            wrt.serialize(ZoneRow {
                activity_id: report.activity_id.clone(),
                zone: zone.zone.number(),
                samples: zone.samples,
                seconds: zone.seconds,
                percent: zone.percent_of_total_time,
            })?;
        }

        wrt.flush()?;
        tracing::info!(path = %path.display(), "zones saved");
    }

    Ok(())
}
