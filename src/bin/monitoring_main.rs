use live_traffic::monitoring::history::{
    generate_report_summary, render_stats_chart, show_light_stats,
};
use std::io::{stdin, stdout, Write};

fn main() {
    env_logger::init();

    loop {
        println!("\nMonitoring Report Menu:");
        println!("1. Display report summary with record counts");
        println!("2. Show recorded light stats");
        println!("3. Render average red wait chart");
        println!("4. Exit");
        print!("Enter your choice: ");
        let _ = stdout().flush();

        let mut input = String::new();
        if stdin().read_line(&mut input).is_err() {
            break;
        }
        let choice = input.trim().parse::<u32>().unwrap_or(0);
        match choice {
            1 => {
                if let Err(e) = generate_report_summary() {
                    eprintln!("Error generating report summary: {}", e);
                }
            }
            2 => {
                if let Err(e) = show_light_stats() {
                    eprintln!("Error displaying light stats: {}", e);
                }
            }
            3 => {
                if let Err(e) = render_stats_chart() {
                    eprintln!("Error rendering stats chart: {}", e);
                }
            }
            4 => break,
            _ => {
                println!("Invalid choice.");
            }
        }
    }
}
