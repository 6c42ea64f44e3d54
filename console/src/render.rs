// Rendering helpers for the console views

use colored::Colorize;
use view_core::alerts::NO_ALERTS_PLACEHOLDER;
use view_core::dashboard::DISTRIBUTION_LABELS;
use view_core::{AlertRow, DistributionSeries, PredictionReport, StatCards};

const BAR_WIDTH: u64 = 30;

pub fn heading(title: &str) {
    println!("\n{}", title.bold().underline());
}

pub fn view_error(message: &str) {
    println!("  {}", message.red());
}

pub fn dashboard(cards: &StatCards, series: &DistributionSeries) {
    println!("  Total Transactions       {}", cards.total_transactions);
    println!(
        "  Fraudulent Transactions  {}",
        cards.fraud_count.to_string().red()
    );
    println!(
        "  Legitimate Transactions  {}",
        cards.legitimate_count.to_string().green()
    );
    println!(
        "  Average Risk Score       {}",
        cards.average_risk_score_display
    );

    println!("\n  Transaction Distribution");
    let total: u64 = series.values.iter().sum();
    for (label, value) in DISTRIBUTION_LABELS.iter().zip(series.values) {
        println!("    {label:<11} {} {value}", proportion_bar(value, total));
    }
}

pub fn alerts_empty() {
    println!("  {}", NO_ALERTS_PLACEHOLDER.dimmed());
}

pub fn alert_row(row: &AlertRow) {
    let status = if row.is_fraud {
        row.status_label.red()
    } else {
        row.status_label.green()
    };

    println!(
        "  {}  Transaction ID: {}",
        if row.is_fraud { "⚠️ " } else { "✅" },
        row.transaction_id
    );
    println!("      Amount: {}", row.amount_display);
    println!("      Risk Score: {}", row.risk_score_display);
    println!("      Status: {status}    {}", row.timestamp_display.dimmed());
    if !row.explanation.is_empty() {
        println!("      Explanation:");
        for line in &row.explanation {
            println!("        - {line}");
        }
    }
}

pub fn prediction(report: &PredictionReport) {
    println!("  Fraud Probability: {}", report.probability_display);
    println!("  Risk Score:        {}", report.risk_score_display);

    let status = if report.is_fraud {
        report.status_label.red()
    } else {
        report.status_label.green()
    };
    println!("  Status:            {status}");

    if !report.explanation.is_empty() {
        println!("  Explanation:");
        for line in &report.explanation {
            println!("    - {line}");
        }
    }
}

fn proportion_bar(value: u64, total: u64) -> String {
    let filled = if total == 0 {
        0
    } else {
        (value * BAR_WIDTH / total) as usize
    };
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(BAR_WIDTH as usize - filled));
    bar
}
