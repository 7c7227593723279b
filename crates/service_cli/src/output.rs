//! Text and CSV rendering of descriptions and simulation tables

use std::io::{self, Write};

use lottery_core::LotteryDescription;
use lottery_sim::{ComparisonRun, SimulationRow, SimulationTable};

/// Write a lottery's theory block as an aligned text table
pub fn write_description<W: Write>(
    out: &mut W,
    title: &str,
    description: &LotteryDescription,
) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(
        out,
        "{:<8} {:>12} {:>12} {:>12}",
        "Outcome", "Payoff", "Probability", "Cumulative"
    )?;
    for (i, label) in description.labels.iter().enumerate() {
        writeln!(
            out,
            "{:<8} {:>12} {:>12} {:>12.6}",
            label,
            description.values[i],
            description.probabilities[i],
            description.cumulative_probabilities[i]
        )?;
    }
    writeln!(out, "Expected value:     {:.4}", description.expected_value)?;
    writeln!(out, "Standard deviation: {:.4}", description.std_dev)?;
    writeln!(out, "Distribution:")?;
    for point in &description.distribution {
        writeln!(out, "  {:>12} -> {:.6}", point.value, point.probability)?;
    }
    Ok(())
}

fn write_header<W: Write>(out: &mut W, labels: &[String]) -> io::Result<()> {
    write!(out, "{:>8}", "Tickets")?;
    for label in labels {
        write!(out, " {:>6}", label)?;
    }
    writeln!(out, " {:>12} {:>12} {:>12}", "Returns", "Mean Returns", "Profit")
}

fn write_row_line<W: Write>(out: &mut W, row: &SimulationRow, decimals: usize) -> io::Result<()> {
    write!(out, "{:>8}", row.tickets)?;
    for count in &row.counts {
        write!(out, " {:>6}", count)?;
    }
    writeln!(
        out,
        " {:>12} {:>12.*} {:>12.*}",
        row.returns, decimals, row.mean_return, decimals, row.profit
    )
}

/// Write every row of a simulation table
pub fn write_table<W: Write>(
    out: &mut W,
    table: &SimulationTable,
    decimals: u32,
) -> io::Result<()> {
    write_header(out, table.labels())?;
    for row in table.rows() {
        write_row_line(out, row, decimals as usize)?;
    }
    Ok(())
}

/// Write a single row with its header
pub fn write_row<W: Write>(
    out: &mut W,
    table: &SimulationTable,
    row: &SimulationRow,
    decimals: u32,
) -> io::Result<()> {
    write_header(out, table.labels())?;
    write_row_line(out, row, decimals as usize)
}

/// Write both tables of a run as one CSV document
///
/// Count columns follow the lottery with more outcomes; the other lottery
/// leaves its missing columns empty. With `tickets`, only the clamped row of
/// each lottery is written.
pub fn write_comparison_csv<W: Write>(
    out: W,
    run: &ComparisonRun,
    tickets: Option<usize>,
) -> Result<(), csv::Error> {
    let labels = if run.first.table.labels().len() >= run.second.table.labels().len() {
        run.first.table.labels()
    } else {
        run.second.table.labels()
    };

    let mut writer = csv::Writer::from_writer(out);

    let mut header = vec!["Lottery".to_string(), "Tickets".to_string()];
    header.extend(labels.iter().cloned());
    header.extend(["Returns", "Mean Returns", "Profit"].map(String::from));
    writer.write_record(&header)?;

    for (name, lottery) in [("1", &run.first), ("2", &run.second)] {
        let table = &lottery.table;
        let rows: Vec<&SimulationRow> = match tickets {
            Some(t) => table.row_for_tickets(t).into_iter().collect(),
            None => table.rows().iter().collect(),
        };

        for row in rows {
            let mut record = vec![name.to_string(), row.tickets.to_string()];
            for i in 0..labels.len() {
                record.push(row.counts.get(i).map(ToString::to_string).unwrap_or_default());
            }
            record.push(row.returns.to_string());
            record.push(row.mean_return.to_string());
            record.push(row.profit.to_string());
            writer.write_record(&record)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Write a lottery description as CSV (one line per outcome)
pub fn write_description_csv<W: Write>(
    out: W,
    description: &LotteryDescription,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["Outcome", "Payoff", "Probability", "Cumulative"])?;
    for (i, label) in description.labels.iter().enumerate() {
        writer.write_record([
            label.clone(),
            description.values[i].to_string(),
            description.probabilities[i].to_string(),
            description.cumulative_probabilities[i].to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
