//! Menu commands: parsing, dispatch, and display formatting.
//!
//! The catalog core never prints; everything user-facing lives here. All
//! state is the one `Catalog` passed into the handler.

use crate::error::Result;
use shelf_catalog::{Book, Catalog};
use shelf_common::BookId;
use std::io::{BufRead, Write};

/// One menu action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { id: BookId, title: String, author: String },
    SearchId(BookId),
    SearchTitle(String),
    ShowAll,
    Checkout(BookId),
    Return(BookId),
    Exit,
}

/// Applies a command to the catalog and writes the outcome to `out`.
///
/// Returns `false` when the loop should stop.
pub fn handle<W: Write>(catalog: &mut Catalog, command: Command, out: &mut W) -> Result<bool> {
    match command {
        Command::Add { id, title, author } => match catalog.add_book(id, title, author) {
            Ok(record) => {
                let book = catalog
                    .find_by_id(id)
                    .expect("record just added is reachable by id");
                writeln!(out, "Added {}: {}", record, book.title())?;
            }
            Err(e) => writeln!(out, "Error: {e}")?,
        },
        Command::SearchId(id) => match catalog.find_by_id(id) {
            Some(book) => print_book(out, book)?,
            None => writeln!(out, "Book not found (id: {id})")?,
        },
        Command::SearchTitle(title) => match catalog.find_by_title(&title) {
            Some(book) => print_book(out, book)?,
            None => writeln!(out, "Book not found (title: {title})")?,
        },
        Command::ShowAll => {
            writeln!(out, "=== Catalog (sorted by title) ===")?;
            let mut any = false;
            for book in catalog.iter_by_title() {
                print_book(out, book)?;
                any = true;
            }
            if !any {
                writeln!(out, "No books in the catalog.")?;
            }
        }
        Command::Checkout(id) => match catalog.checkout(id) {
            Some(true) => writeln!(out, "Checked out {id}.")?,
            Some(false) => writeln!(out, "Book {id} is already checked out.")?,
            None => writeln!(out, "Book not found (id: {id})")?,
        },
        Command::Return(id) => match catalog.return_book(id) {
            Some(false) => writeln!(out, "Returned {id}.")?,
            Some(true) => writeln!(out, "Book {id} was not checked out.")?,
            None => writeln!(out, "Book not found (id: {id})")?,
        },
        Command::Exit => return Ok(false),
    }
    Ok(true)
}

fn print_book<W: Write>(out: &mut W, book: &Book) -> Result<()> {
    writeln!(
        out,
        "[{}] {:<30} | {:<20} | {}",
        book.id(),
        book.title(),
        book.author(),
        if book.is_available() { "Available" } else { "Checked Out" }
    )?;
    Ok(())
}

/// Seeds the sample records shipped with the original system.
pub fn seed_sample_data(catalog: &mut Catalog) -> Result<()> {
    let samples = [
        (1001, "The C++ Programming Language", "B. Stroustrup"),
        (2042, "Clean Code", "Robert C. Martin"),
        (1005, "Introduction to Algorithms", "T. Cormen"),
        (3099, "Operating System Concepts", "A. Silberschatz"),
        (5001, "Computer Networking", "J. Kurose"),
    ];
    for (id, title, author) in samples {
        catalog.add_book(BookId::new(id), title, author)?;
    }
    Ok(())
}

/// Runs the interactive menu loop over `input`/`out` until exit or EOF.
pub fn run_loop<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        writeln!(
            out,
            "\n1. Add Book\n2. Search (id)\n3. Search (title)\n4. Show All\n5. Checkout\n6. Return\n0. Exit"
        )?;
        write!(out, ">> ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(());
        };

        let command = match line.trim() {
            "0" => Command::Exit,
            "1" => match prompt_add(input, out)? {
                Some(command) => command,
                None => return Ok(()),
            },
            "2" => match prompt_id(input, out, "Id: ")? {
                Some(id) => Command::SearchId(id),
                None => return Ok(()),
            },
            "3" => {
                write!(out, "Title: ")?;
                out.flush()?;
                match read_line(input)? {
                    Some(title) => Command::SearchTitle(title.trim().to_string()),
                    None => return Ok(()),
                }
            }
            "4" => Command::ShowAll,
            "5" => match prompt_id(input, out, "Id: ")? {
                Some(id) => Command::Checkout(id),
                None => return Ok(()),
            },
            "6" => match prompt_id(input, out, "Id: ")? {
                Some(id) => Command::Return(id),
                None => return Ok(()),
            },
            _ => {
                writeln!(out, "Invalid option.")?;
                continue;
            }
        };

        if !handle(catalog, command, out)? {
            return Ok(());
        }
    }
}

/// Reads one line, returning `None` on EOF.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn prompt_id<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<BookId>> {
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.trim().parse::<u32>() {
            Ok(raw) => return Ok(Some(BookId::new(raw))),
            Err(_) => writeln!(out, "Expected a numeric id.")?,
        }
    }
}

fn prompt_add<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<Command>> {
    let Some(id) = prompt_id(input, out, "Id: ")? else {
        return Ok(None);
    };
    write!(out, "Title: ")?;
    out.flush()?;
    let Some(title) = read_line(input)? else {
        return Ok(None);
    };
    write!(out, "Author: ")?;
    out.flush()?;
    let Some(author) = read_line(input)? else {
        return Ok(None);
    };
    Ok(Some(Command::Add {
        id,
        title: title.trim().to_string(),
        author: author.trim().to_string(),
    }))
}
