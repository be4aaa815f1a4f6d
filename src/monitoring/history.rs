use std::error::Error;
use std::fs::{File, OpenOptions};
use std::path::Path;

use plotters::prelude::*;
use serde::Serialize;

use crate::communication::messages::SimulationMessage;
use crate::global_variables::{EVENTS_LOG_FILE, STATS_CHART_FILE, STATS_LOG_FILE};
use crate::shared_data::{current_timestamp, LightStatsRecord, SimulationEventRecord};

// Generic helper to append a record to a CSV file, writing the header only
// when the file is first created.
fn log_to_csv<T: Serialize>(filename: &str, record: &T) -> Result<(), Box<dyn Error>> {
    let file_exists = Path::new(filename).exists();
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(filename)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);
    wtr.serialize(record)?;
    wtr.flush()?;
    Ok(())
}

/// Appends one statistics sample to the trail. Logging faults are reported
/// and swallowed so the tick loop never stalls on disk problems.
pub fn log_light_stats(record: &LightStatsRecord) {
    if let Err(e) = log_to_csv(STATS_LOG_FILE, record) {
        log::error!("Error logging light stats: {}", e);
    }
}

/// Appends one simulation event, stored as its raw JSON payload.
pub fn log_simulation_message(message: &SimulationMessage) {
    match serde_json::to_string(message) {
        Ok(raw_data) => {
            let record = SimulationEventRecord {
                timestamp: current_timestamp(),
                raw_data,
            };
            if let Err(e) = log_to_csv(EVENTS_LOG_FILE, &record) {
                log::error!("Error logging simulation event: {}", e);
            }
        }
        Err(e) => log::error!("Error serializing simulation event: {}", e),
    }
}

fn read_stats_records(filename: &str) -> Result<Vec<LightStatsRecord>, Box<dyn Error>> {
    let file = File::open(filename)?;
    let mut rdr = csv::Reader::from_reader(file);
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: LightStatsRecord = result?;
        records.push(record);
    }
    Ok(records)
}

// Helper: Count records in a CSV file.
fn count_csv_records(filename: &str) -> Result<usize, Box<dyn Error>> {
    let file = File::open(filename)?;
    let mut rdr = csv::Reader::from_reader(file);
    Ok(rdr.records().filter_map(Result::ok).count())
}

/// Reads and displays the recorded statistics samples.
pub fn show_light_stats() -> Result<(), Box<dyn Error>> {
    println!("Light Stats:");
    for record in read_stats_records(STATS_LOG_FILE)? {
        println!(
            "tick {:>5}  green {:>2}  avg red wait {:>6.1}s  (at {})",
            record.tick, record.green_lights, record.average_red_wait, record.timestamp
        );
    }
    Ok(())
}

/// Displays how many records each trail currently holds.
pub fn generate_report_summary() -> Result<(), Box<dyn Error>> {
    println!("Generating Report Summary...");
    let stats_count = count_csv_records(STATS_LOG_FILE)?;
    let events_count = count_csv_records(EVENTS_LOG_FILE).unwrap_or(0);
    println!("Report Summary:");
    println!("Light Stats: {} records", stats_count);
    println!("Simulation Events: {} records", events_count);
    Ok(())
}

/// Renders the recorded average red wait per tick as a scatterplot.
pub fn render_stats_chart() -> Result<(), Box<dyn Error>> {
    let records = read_stats_records(STATS_LOG_FILE)?;
    if records.is_empty() {
        println!("No light stats recorded yet.");
        return Ok(());
    }

    let max_tick = records.iter().map(|r| r.tick).max().unwrap_or(0);
    let max_wait = records
        .iter()
        .map(|r| r.average_red_wait)
        .fold(0.0f64, f64::max);

    let backend = BitMapBackend::new(STATS_CHART_FILE, (800, 600));
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Red Wait per Tick", ("sans-serif", 20))
        .margin(40)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(0..max_tick + 1, 0.0..max_wait.max(1.0))?;

    chart
        .configure_mesh()
        .x_desc("tick")
        .y_desc("avg red wait (s)")
        .draw()?;
    chart.draw_series(
        records
            .iter()
            .map(|r| Circle::new((r.tick, r.average_red_wait), 4, RED.filled())),
    )?;

    root.present()?;
    println!("Stats chart saved to {}", STATS_CHART_FILE);
    Ok(())
}
