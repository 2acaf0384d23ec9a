//! Writes a small deterministic orders CSV to drag onto the main window.

fn main() {
    let output_path = "sample_orders.csv";

    let customers = ["Ada", "Bo", "Cyd", "Dee", "Eli"];
    let regions = ["North", "South", "East", "West"];
    let statuses = ["paid", "pending", "cancelled"];

    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record(["order_id", "customer", "region", "status", "amount"])
        .expect("Failed to write header");

    let mut order_id: i64 = 1000;
    let mut n_rows = 0;
    for (i, customer) in customers.iter().enumerate() {
        for (j, region) in regions.iter().enumerate() {
            // Each order appears twice under the same id so deduplicating
            // on order_id has something to remove.
            for dup in 0..2 {
                let status = statuses[(i + j + dup) % statuses.len()];
                let amount = 10.0 + (i * 7 + j * 3 + dup) as f64;
                writer
                    .write_record([
                        order_id.to_string(),
                        customer.to_string(),
                        region.to_string(),
                        status.to_string(),
                        format!("{amount:.2}"),
                    ])
                    .expect("Failed to write row");
                n_rows += 1;
            }
            order_id += 1;
        }
    }

    writer.flush().expect("Failed to flush CSV");
    println!("Wrote {n_rows} orders to {output_path}");
}
