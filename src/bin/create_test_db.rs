use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use spendlog_rs::{
    NewTransaction, NewUser, PasswordHash, count_transactions, count_users, create_transaction,
    create_user, initialize_db,
};

/// A utility for creating a test database for the REST API server of spendlog_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test user...");

    create_user(
        NewUser {
            email: "test@test.com".to_owned(),
            password_hash: PasswordHash::new("test", PasswordHash::DEFAULT_COST)?,
            name: "Test User".to_owned(),
        },
        &conn,
    )?;

    println!("Creating test transactions...");

    let transactions = [
        ("2024-03-01", "Salary", "income", "Work", 500_000),
        ("2024-03-02", "Rent", "expense", "Housing", -180_000),
        ("2024-03-05", "Groceries", "expense", "Food", -8_450),
        ("2024-03-15", "Freelance invoice", "income", "Work", 42_000),
    ];

    for (date, description, transaction_type, category, amount) in transactions {
        create_transaction(
            NewTransaction {
                date: Some(date.to_owned()),
                description: description.to_owned(),
                transaction_type: transaction_type.to_owned(),
                category: category.to_owned(),
                amount,
            },
            &conn,
        )?;
    }

    println!(
        "Success! Created {} user(s) and {} transaction(s).",
        count_users(&conn)?,
        count_transactions(&conn)?
    );

    Ok(())
}
