use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use shelf::api::ShelfApi;
use shelf::auth::UserStore;
use shelf::commands::stats::LibraryStats;
use shelf::commands::{CmdMessage, MessageLevel};
use shelf::error::{Result, ShelfError};
use shelf::model::{Book, Loan, Member};
use shelf::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

mod args;
use args::{Cli, Commands};

const DATA_FILENAME: &str = "data.json";
const USERS_FILENAME: &str = "users.json";

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;

    match cli.command {
        Commands::Register { username, password } => {
            let users = UserStore::new(data_dir.join(USERS_FILENAME));
            users.register(username.trim(), &password)?;
            println!("{}", "Account created. You can now log in.".green());
            Ok(())
        }
        Commands::Login { username, password } => {
            let users = UserStore::new(data_dir.join(USERS_FILENAME));
            if users.verify(username.trim(), &password) {
                println!("{}", format!("Welcome, {}", username.trim()).green());
                Ok(())
            } else {
                Err(ShelfError::Api("Invalid username or password".into()))
            }
        }
        command => {
            let mut api = ShelfApi::open(FileStore::new(data_dir.join(DATA_FILENAME)))?;
            if let Some(warning) = api.load_warning() {
                eprintln!("{}", warning.yellow());
            }
            dispatch(&mut api, command)
        }
    }
}

fn resolve_data_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = dir {
        return Ok(dir);
    }
    let proj_dirs = ProjectDirs::from("com", "shelf", "shelf")
        .ok_or_else(|| ShelfError::Store("Could not determine a data directory".into()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn dispatch(api: &mut ShelfApi<FileStore>, command: Commands) -> Result<()> {
    match command {
        Commands::Books => {
            print_books(&api.list_books().books);
            Ok(())
        }
        Commands::AddBook {
            title,
            author,
            isbn,
        } => handle_add_book(api, title, author, isbn),
        Commands::RemoveBook { id } => {
            let result = api.remove_book(&normalize_id(&id))?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Members => {
            print_members(&api.list_members().members);
            Ok(())
        }
        Commands::AddMember { name, email, phone } => handle_add_member(api, name, email, phone),
        Commands::RemoveMember { id } => {
            let result = api.remove_member(&normalize_id(&id))?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Issue { book_id, member_id } => {
            let result = api.issue_book(&normalize_id(&book_id), &normalize_id(&member_id))?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Return { book_id } => {
            let result = api.return_book(&normalize_id(&book_id))?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Loans => {
            print_loans(&api.list_loans().loans);
            Ok(())
        }
        Commands::Stats => {
            print_stats(api.stats().stats.unwrap_or_default());
            Ok(())
        }
        Commands::Export { dest } => {
            let result = api.export(dest)?;
            print_messages(&result.messages);
            Ok(())
        }
        Commands::Register { .. } | Commands::Login { .. } => unreachable!("handled in run"),
    }
}

fn handle_add_book(
    api: &mut ShelfApi<FileStore>,
    title: String,
    author: String,
    isbn: String,
) -> Result<()> {
    let (title, author, isbn) = (
        title.trim().to_string(),
        author.trim().to_string(),
        isbn.trim().to_string(),
    );
    if title.is_empty() || author.is_empty() || isbn.is_empty() {
        return Err(ShelfError::Api("Title, author and ISBN are all required".into()));
    }
    let result = api.add_book(title, author, isbn)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add_member(
    api: &mut ShelfApi<FileStore>,
    name: String,
    email: String,
    phone: String,
) -> Result<()> {
    let (name, email, phone) = (
        name.trim().to_string(),
        email.trim().to_string(),
        phone.trim().to_string(),
    );
    if name.is_empty() || email.is_empty() || phone.is_empty() {
        return Err(ShelfError::Api("Name, email and phone are all required".into()));
    }
    let result = api.add_member(name, email, phone)?;
    print_messages(&result.messages);
    Ok(())
}

// Entered ids are case-insensitive at the desk: b001 means B001.
fn normalize_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_books(books: &[Book]) {
    if books.is_empty() {
        println!("No books in the catalog.");
        return;
    }
    println!(
        "{}",
        format!(
            "{} {} {} {} STATUS",
            pad("ID", 6),
            pad("TITLE", 32),
            pad("AUTHOR", 22),
            pad("ISBN", 14)
        )
        .bold()
    );
    for book in books {
        let status = match book.status {
            shelf::model::BookStatus::Available => book.status.to_string().green(),
            shelf::model::BookStatus::Issued => book.status.to_string().yellow(),
        };
        println!(
            "{} {} {} {} {}",
            pad(&book.id, 6),
            pad(&book.title, 32),
            pad(&book.author, 22),
            pad(&book.isbn, 14),
            status
        );
    }
}

fn print_members(members: &[Member]) {
    if members.is_empty() {
        println!("No members on the roster.");
        return;
    }
    println!(
        "{}",
        format!(
            "{} {} {} {} JOINED",
            pad("ID", 6),
            pad("NAME", 24),
            pad("EMAIL", 28),
            pad("PHONE", 16)
        )
        .bold()
    );
    for member in members {
        println!(
            "{} {} {} {} {}",
            pad(&member.id, 6),
            pad(&member.name, 24),
            pad(&member.email, 28),
            pad(&member.phone, 16),
            member.join_date
        );
    }
}

fn print_loans(loans: &[Loan]) {
    if loans.is_empty() {
        println!("No loans on the ledger.");
        return;
    }
    println!(
        "{}",
        format!(
            "{} {} {} {} {} {} STATUS",
            pad("ID", 6),
            pad("BOOK", 8),
            pad("MEMBER", 8),
            pad("ISSUED", 12),
            pad("DUE", 12),
            pad("RETURNED", 12)
        )
        .bold()
    );
    for loan in loans {
        let returned = loan
            .return_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let status = match loan.status {
            shelf::model::LoanStatus::Issued => loan.status.to_string().yellow(),
            shelf::model::LoanStatus::Returned => loan.status.to_string().green(),
        };
        println!(
            "{} {} {} {} {} {} {}",
            pad(&loan.id, 6),
            pad(&loan.book_id, 8),
            pad(&loan.member_id, 8),
            pad(&loan.issue_date.to_string(), 12),
            pad(&loan.due_date.to_string(), 12),
            pad(&returned, 12),
            status
        );
    }
}

fn print_stats(stats: LibraryStats) {
    println!("Total books:     {}", stats.total_books.to_string().bold());
    println!("Total members:   {}", stats.total_members.to_string().bold());
    println!("Books issued:    {}", stats.books_issued.to_string().bold());
    println!("Books available: {}", stats.books_available.to_string().bold());
    println!("Overdue books:   {}", stats.overdue.to_string().bold());
}

fn pad(s: &str, width: usize) -> String {
    let shown = truncate_to_width(s, width);
    let padding = width.saturating_sub(shown.width());
    format!("{}{}", shown, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
