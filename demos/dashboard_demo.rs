use chrono::{Local, Utc};
use sales_target_dashboard::*;

fn main() -> Result<()> {
    println!("📊 Sales Target Dashboard Demo\n");

    let today = Local::now().date_naive();
    let mut dashboard = SalesDashboard::new(builtin_source()?, DashboardConfig::default(), today)?;

    println!("Years available: {:?}", dashboard.years());
    println!(
        "Selected: {} / {} / day {}\n",
        dashboard.view().selected_year,
        dashboard.current_month()?.label,
        dashboard.view().selected_day
    );

    print_summary(&dashboard)?;

    println!("\n✏️  Setting today's sales to 750 and raising the monthly target by 10%...");
    let raised = dashboard.form_defaults()?.monthly_target * 1.1;
    dashboard.submit_monthly_edit(&format!("{:.0}", raised), "750", Utc::now());
    if let Some(status) = dashboard.status(Utc::now()) {
        println!("   {:?}: {}", status.kind, status.text);
    }

    print_summary(&dashboard)?;

    println!("\n📈 Cumulative series:");
    for point in dashboard.cumulative_chart()? {
        println!(
            "  {:>4}  target {:>10.2}  achieved {:>10.2}",
            point.label, point.accumulated_target, point.accumulated_achieved
        );
    }

    println!("\n📅 Daily detail for {}:", dashboard.current_month()?.label);
    for point in dashboard.daily_chart()?.iter().filter(|p| p.daily_achieved > 0.0) {
        println!(
            "  day {:>2}: {:>10.2} (running {:>10.2})",
            point.day, point.daily_achieved, point.accumulated_achieved
        );
    }

    let report = check_dataset(dashboard.dataset(), 0.01);
    println!(
        "\n✅ Dataset consistent: {} ({} warnings)",
        report.is_consistent,
        report.warnings.len()
    );

    Ok(())
}

fn print_summary(dashboard: &SalesDashboard) -> Result<()> {
    let month = dashboard.current_month()?;
    let year = dashboard.current_year()?;

    println!(
        "  Month {}: {:.2} of {:.2} ({})",
        month.label,
        month.achieved,
        month.target,
        dashboard.monthly_progress()?
    );
    println!(
        "  Year {}: {:.2} of {:.2} ({})",
        year.year,
        year.achieved,
        year.target,
        dashboard.annual_progress()?
    );
    Ok(())
}
