//! SQL schema for the frontdesk SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `user_version` pragma.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS appointments (
    id          TEXT PRIMARY KEY,
    service     TEXT NOT NULL,
    date        TEXT NOT NULL,
    time        TEXT NOT NULL,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL,
    phone       TEXT NOT NULL,
    address     TEXT NOT NULL DEFAULT '',
    message     TEXT NOT NULL DEFAULT '',
    status      TEXT NOT NULL DEFAULT 'pending',  -- 'pending'|'confirmed'|'completed'|'cancelled'
    created_at  TEXT NOT NULL,   -- ISO 8601 UTC; server-assigned
    updated_at  TEXT NOT NULL    -- refreshed on every status change
);

CREATE TABLE IF NOT EXISTS contacts (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL,
    subject     TEXT NOT NULL DEFAULT 'General Inquiry',
    message     TEXT NOT NULL,
    created_at  TEXT NOT NULL
);

-- At most one row per email; the subscribe path checks before inserting
-- and this constraint backstops it.
CREATE TABLE IF NOT EXISTS subscribers (
    id            TEXT PRIMARY KEY,
    email         TEXT NOT NULL UNIQUE,
    subscribed_at TEXT NOT NULL,
    active        INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE IF NOT EXISTS leads (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    phone       TEXT NOT NULL,
    email       TEXT,
    message     TEXT,
    created_at  TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS appointments_created_idx ON appointments(created_at);
CREATE INDEX IF NOT EXISTS appointments_status_idx  ON appointments(status);
CREATE INDEX IF NOT EXISTS contacts_created_idx     ON contacts(created_at);

PRAGMA user_version = 1;
";
