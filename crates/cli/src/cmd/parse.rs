//! Parse command: show the fields extracted from a job folder name.

use artdrop_core::job;

use crate::ParseArgs;

pub fn run(args: &ParseArgs) {
    match job::parse(&args.folder_name) {
        Ok(info) => {
            println!("OK   artdrop parse");
            println!("job_number: {}", info.job_number);
            println!("customer: {}", info.customer);
            println!("company: {}", info.company);
            println!("sku: {}", info.sku);
            println!("quantity: {}", info.quantity);
            println!("po_number: {}", info.po_number);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
