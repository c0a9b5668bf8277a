use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::UserIdError;
use crate::user::errors::UsernameError;

/// Role given to users that did not ask for another one.
pub const DEFAULT_ROLE: &str = "User";

/// User aggregate entity.
///
/// Represents a registered user. The plaintext password never reaches this
/// type; only its hash is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Build a new active user with a fresh identifier.
    ///
    /// # Arguments
    /// * `username` - Unique username
    /// * `email` - Unique email address
    /// * `password_hash` - Already hashed password
    /// * `full_name` - Optional display name
    /// * `role` - Role string
    /// * `now` - Creation instant, also used as the first `updated_at`
    pub fn new(
        username: Username,
        email: EmailAddress,
        password_hash: String,
        full_name: Option<String>,
        role: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: UserId::new(),
            username,
            email,
            password_hash,
            full_name,
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Refresh `updated_at`, never moving it backwards.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.updated_at {
            self.updated_at = now;
        }
    }

    /// Record a successful login.
    pub fn record_login(&mut self, now: DateTime<Utc>) {
        self.last_login_at = Some(now);
        self.touch(now);
    }

    /// Name shown to clients: the full name when set, otherwise the username.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.username.as_str(),
        }
    }

    /// Identity embedded in session tokens issued for this user.
    pub fn identity(&self) -> auth::Identity {
        auth::Identity::new(
            self.id,
            self.username.as_str(),
            self.email.as_str(),
            self.role.as_str(),
        )
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    ///
    /// # Returns
    /// UserId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Usernames chosen by an administrator are 3-30 characters of letters,
/// digits and underscores. Usernames derived from an email address at
/// registration keep the local part as it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    pub const MIN_LENGTH: usize = 3;
    pub const MAX_LENGTH: usize = 30;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `InvalidLength` - Username shorter than 3 or longer than 30 characters
    /// * `InvalidCharacters` - Contains anything but ASCII letters, digits and `_`
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let username = Self::with_valid_length(username)?;
        let username = Self::with_valid_chars(username)?;
        Ok(Self(username))
    }

    /// Derive a username from the local part of an email address.
    ///
    /// Uniqueness is not checked here; the directory rejects collisions.
    pub fn from_email(email: &EmailAddress) -> Self {
        Self(email.local_part().to_string())
    }

    /// Wrap a username read back from storage.
    pub(crate) fn from_stored(username: String) -> Self {
        Self(username)
    }

    fn with_valid_length(username: String) -> Result<String, UsernameError> {
        let length = username.chars().count();
        if (Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            Ok(username)
        } else {
            Err(UsernameError::InvalidLength {
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
                actual: length,
            })
        }
    }

    fn with_valid_chars(username: String) -> Result<String, UsernameError> {
        if username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            Ok(username)
        } else {
            Err(UsernameError::InvalidCharacters)
        }
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Only bare
/// addresses are accepted; display-name forms such as
/// `Alice <alice@example.com>` are rejected so that one mailbox has a
/// single stored spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322, or carries display text
    pub fn new(email: String) -> Result<Self, EmailError> {
        let options = email_address::Options::default().without_display_text();
        email_address::EmailAddress::parse_with_options(&email, options)
            .map(|parsed| EmailAddress(parsed.email()))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Wrap an email address read back from storage.
    pub(crate) fn from_stored(email: String) -> Self {
        Self(email)
    }

    /// Text before the domain separator. A quoted local part may itself
    /// contain `@`, so the split is on the last one.
    pub fn local_part(&self) -> &str {
        self.0
            .rsplit_once('@')
            .map_or(self.0.as_str(), |(local, _)| local)
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a user on behalf of an administrator
#[derive(Debug)]
pub struct CreateUserCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
    pub full_name: Option<String>,
    pub role: String,
}

impl CreateUserCommand {
    /// Construct a new create user command.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `email` - Validated email address
    /// * `password` - Plain text password (will be hashed by service)
    /// * `full_name` - Optional display name
    /// * `role` - Role, `DEFAULT_ROLE` when the caller gave none
    pub fn new(
        username: Username,
        email: EmailAddress,
        password: String,
        full_name: Option<String>,
        role: Option<String>,
    ) -> Self {
        Self {
            username,
            email,
            password,
            full_name,
            role: role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        }
    }
}

/// Command to update an existing user with optional validated fields.
///
/// Only provided fields are changed. Username and password are not
/// updatable through this command.
#[derive(Debug, Default)]
pub struct UpdateUserCommand {
    pub email: Option<EmailAddress>,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}
