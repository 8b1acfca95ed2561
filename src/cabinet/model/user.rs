use crate::codec::{FieldReader, FieldWriter};
use crate::error::Result;
use crate::store::Record;

pub const USERNAME_LEN: usize = 50;
pub const PASSWORD_LEN: usize = 50;

pub const DEFAULT_CAPACITY: usize = 20;

/// Library account. Usernames are the one string-keyed identifier in the
/// system and are enforced unique at registration.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub username: String,
    pub password: String,
    pub is_librarian: bool,
}

impl Record for User {
    const ENCODED_LEN: usize = USERNAME_LEN + PASSWORD_LEN + 4;
    const SNAPSHOT_FILE: &'static str = "users.dat";

    fn encode(&self, w: &mut FieldWriter<'_>) {
        w.put_text(&self.username, USERNAME_LEN);
        w.put_text(&self.password, PASSWORD_LEN);
        w.put_bool(self.is_librarian);
    }

    fn decode(r: &mut FieldReader<'_>) -> Result<Self> {
        Ok(Self {
            username: r.take_text(USERNAME_LEN)?,
            password: r.take_text(PASSWORD_LEN)?,
            is_librarian: r.take_bool()?,
        })
    }
}
