use crate::commands::{index_by_key, CmdMessage, CmdOutcome};
use crate::error::{CabinetError, Result};
use crate::model::book::{Book, ID_BASE};
use crate::model::borrower::Borrower;
use crate::model::user::User;
use crate::store::Store;
use chrono::{DateTime, Duration, Utc};

/// Loan period applied at borrow time.
pub const LOAN_DAYS: i64 = 14;

pub fn add_book(
    books: &mut Store<Book>,
    title: String,
    author: String,
    year: i32,
) -> Result<CmdOutcome<Book>> {
    let book = Book {
        id: books.next_key(ID_BASE),
        title,
        author,
        year,
        available: true,
    };
    let added = book.clone();
    books.create(book)?;
    Ok(CmdOutcome::new(added.clone()).with_message(CmdMessage::success(format!(
        "Book added. Id: {}",
        added.id
    ))))
}

/// Substring search over title and author, or by id for digit-leading
/// terms.
pub fn search_books(books: &Store<Book>, term: &str) -> Result<CmdOutcome<Vec<Book>>> {
    let matches: Vec<Book> = books
        .search(term)
        .filter_map(|i| books.get(i).cloned())
        .collect();
    Ok(CmdOutcome::new(matches))
}

pub fn remove_book(
    books: &mut Store<Book>,
    borrowers: &Store<Borrower>,
    book_id: i32,
) -> Result<CmdOutcome<Book>> {
    let index = index_by_key(books, book_id, "book")?;
    if borrowers.find_by_key(book_id).is_some() {
        return Err(CabinetError::InvalidInput(format!(
            "book {} is currently borrowed",
            book_id
        )));
    }
    let removed = books.delete_at(index)?;
    Ok(CmdOutcome::new(removed.clone()).with_message(CmdMessage::success(format!(
        "Book removed: {}",
        removed.title
    ))))
}

/// Lend a book: it must exist and be available, and the loan table must
/// have room. The due date is `now` plus the loan period.
pub fn borrow(
    books: &mut Store<Book>,
    borrowers: &mut Store<Borrower>,
    book_id: i32,
    borrower_id: i32,
    borrower_name: String,
    now: DateTime<Utc>,
) -> Result<CmdOutcome<Borrower>> {
    let book_index = index_by_key(books, book_id, "book")?;
    let book = books
        .get(book_index)
        .ok_or_else(|| CabinetError::NotFound(format!("book {} not found", book_id)))?;
    if !book.available {
        return Err(CabinetError::InvalidInput(format!(
            "book {} is not available",
            book_id
        )));
    }

    let due_date = now + Duration::days(LOAN_DAYS);
    let loan = Borrower {
        book_id,
        borrower_id,
        borrower_name,
        due_date,
    };
    let recorded = loan.clone();
    borrowers.create(loan)?;
    if let Some(book) = books.get_mut(book_index) {
        book.available = false;
    }

    Ok(CmdOutcome::new(recorded).with_message(CmdMessage::success(format!(
        "Book borrowed. Due: {}",
        due_date.format("%Y-%m-%d")
    ))))
}

/// Take a book back: drop its loan record and mark it available again.
pub fn return_book(
    books: &mut Store<Book>,
    borrowers: &mut Store<Borrower>,
    book_id: i32,
    now: DateTime<Utc>,
) -> Result<CmdOutcome<Borrower>> {
    let book_index = index_by_key(books, book_id, "book")?;
    let loan_index = borrowers
        .find_by_key(book_id)
        .ok_or_else(|| CabinetError::InvalidInput(format!("book {} is not borrowed", book_id)))?;

    let loan = borrowers.delete_at(loan_index)?;
    if let Some(book) = books.get_mut(book_index) {
        book.available = true;
    }

    let mut outcome = CmdOutcome::new(loan.clone())
        .with_message(CmdMessage::success("Book returned"));
    if now > loan.due_date {
        let days_late = (now - loan.due_date).num_days().max(1);
        outcome.add_message(CmdMessage::warning(format!(
            "Returned {} day(s) late",
            days_late
        )));
    }
    Ok(outcome)
}

/// Current loans in store order.
pub fn borrowed(borrowers: &Store<Borrower>) -> Result<CmdOutcome<Vec<Borrower>>> {
    Ok(CmdOutcome::new(borrowers.all()))
}

/// Loans whose due date has passed.
pub fn overdue(
    borrowers: &Store<Borrower>,
    now: DateTime<Utc>,
) -> Result<CmdOutcome<Vec<Borrower>>> {
    let late: Vec<Borrower> = borrowers
        .records()
        .iter()
        .filter(|loan| loan.due_date < now)
        .cloned()
        .collect();
    Ok(CmdOutcome::new(late))
}

/// Register a library account. Usernames must be unique.
pub fn register(
    users: &mut Store<User>,
    username: String,
    password: String,
    is_librarian: bool,
) -> Result<CmdOutcome<User>> {
    if users.records().iter().any(|u| u.username == username) {
        return Err(CabinetError::DuplicateKey(format!(
            "username {} already registered",
            username
        )));
    }
    let user = User {
        username,
        password,
        is_librarian,
    };
    let registered = user.clone();
    users.create(user)?;
    Ok(CmdOutcome::new(registered.clone()).with_message(CmdMessage::success(format!(
        "User registered: {}",
        registered.username
    ))))
}

/// Change a password after checking the current one.
pub fn change_password(
    users: &mut Store<User>,
    username: &str,
    current: &str,
    new: String,
) -> Result<CmdOutcome<User>> {
    let index = users
        .records()
        .iter()
        .position(|u| u.username == username)
        .ok_or_else(|| CabinetError::NotFound(format!("user {} not found", username)))?;
    let user = users
        .get_mut(index)
        .ok_or_else(|| CabinetError::NotFound(format!("user {} not found", username)))?;
    if user.password != current {
        return Err(CabinetError::InvalidInput("current password is wrong".into()));
    }
    user.password = new;
    let updated = user.clone();
    Ok(CmdOutcome::new(updated).with_message(CmdMessage::success("Password changed")))
}
