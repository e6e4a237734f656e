//! Entity sink contract and SQLite upsert writer.
//!
//! # Responsibility
//! - Persist one normalized row per call with insert-or-update semantics.
//! - Keep table/column naming and SQL inside the persistence boundary.
//!
//! # Invariants
//! - Each write is one `INSERT ... ON CONFLICT(id) DO UPDATE` statement.
//! - The update clause covers every non-key column; no partial updates.
//! - No foreign-key checks: rows may reference records not yet written.

use crate::db::migrations::{current_version, latest_version};
use crate::model::date::CompositeDate;
use crate::model::row::{EntityKind, EntityRow};
use crate::repo::date_encoding::{DateEncoding, DateFormat};
use crate::repo::{RepoError, RepoResult};
use log::debug;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};

/// Destination for normalized rows.
pub trait EntitySink {
    /// Writes `row`, replacing any stored row with the same kind and id.
    fn persist(&self, row: &EntityRow) -> RepoResult<()>;
}

/// Table layout for one entity kind.
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub table: &'static str,
    /// Non-key columns, in bind order after `id`.
    pub columns: &'static [&'static str],
}

/// Returns the table and column layout storing rows of `kind`.
pub fn table_spec(kind: EntityKind) -> TableSpec {
    match kind {
        EntityKind::Note => TableSpec {
            table: "note",
            columns: &["detail"],
        },
        EntityKind::Source => TableSpec {
            table: "source",
            columns: &["detail", "title", "location"],
        },
        EntityKind::Person => TableSpec {
            table: "person",
            columns: &["userid", "birthsex", "isprivate", "noteid", "sourceid"],
        },
        EntityKind::Family => TableSpec {
            table: "family",
            columns: &["userid", "primeid", "partnerid", "noteid"],
        },
        EntityKind::Child => TableSpec {
            table: "child",
            columns: &[
                "personid",
                "familyid",
                "parent1id",
                "parent1rel",
                "parent2id",
                "parent2rel",
                "ordinal",
            ],
        },
        EntityKind::Attachment => TableSpec {
            table: "attach",
            columns: &["referenceid", "filename", "fileinfo", "detail"],
        },
        EntityKind::Name => TableSpec {
            table: "name",
            columns: &[
                "type",
                "ispreferred",
                "personid",
                "given",
                "surname",
                "familiar",
                "title",
                "displayas",
                "date",
            ],
        },
        EntityKind::Fact => TableSpec {
            table: "fact",
            columns: &[
                "type",
                "referenceid",
                "place",
                "date",
                "detail",
                "noteid",
            ],
        },
    }
}

/// Builds the upsert statement for `spec`.
pub fn upsert_sql(spec: &TableSpec) -> String {
    let placeholders = (1..=spec.columns.len() + 1)
        .map(|index| format!("?{index}"))
        .collect::<Vec<_>>()
        .join(", ");
    let assignments = spec
        .columns
        .iter()
        .map(|column| format!("{column} = excluded.{column}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {} (id, {}) VALUES ({placeholders}) ON CONFLICT(id) DO UPDATE SET {assignments};",
        spec.table,
        spec.columns.join(", ")
    )
}

/// SQLite-backed upsert writer over a borrowed connection.
pub struct SqliteUpsertWriter<'conn> {
    conn: &'conn Connection,
    dates: Box<dyn DateEncoding>,
}

impl<'conn> SqliteUpsertWriter<'conn> {
    /// Creates a writer after checking that `conn` carries the import schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable` when an entity table is absent.
    pub fn try_new(conn: &'conn Connection, format: DateFormat) -> RepoResult<Self> {
        ensure_schema(conn)?;
        Ok(Self {
            conn,
            dates: format.encoding(),
        })
    }

    /// Name of the active date encoding.
    pub fn date_format(&self) -> &'static str {
        self.dates.name()
    }

    fn encode_date(&self, date: &CompositeDate) -> RepoResult<Value> {
        let encoded = self.dates.encode(date)?;
        debug!(
            "event=date_encode module=repo format={} value={}",
            self.dates.name(),
            encoded
        );
        Ok(Value::Text(encoded))
    }

    /// Binds `row` in `table_spec` order, starting with `id`.
    fn bind_values(&self, row: &EntityRow) -> RepoResult<Vec<Value>> {
        let values = match row {
            EntityRow::Note(row) => vec![Value::Text(row.id.clone()), text(&row.detail)],
            EntityRow::Source(row) => vec![
                Value::Text(row.id.clone()),
                text(&row.detail),
                text(&row.title),
                text(&row.location),
            ],
            EntityRow::Person(row) => vec![
                Value::Text(row.id.clone()),
                text(&row.user_id),
                text(&row.birth_sex),
                Value::Integer(bool_to_int(row.is_private)),
                text(&row.note_id),
                text(&row.source_id),
            ],
            EntityRow::Family(row) => vec![
                Value::Text(row.id.clone()),
                text(&row.user_id),
                text(&row.prime_id),
                text(&row.partner_id),
                text(&row.note_id),
            ],
            EntityRow::Child(row) => vec![
                Value::Text(row.id.clone()),
                text(&row.person_id),
                text(&row.family_id),
                text(&row.parent1_id),
                text(&row.parent1_relation),
                text(&row.parent2_id),
                text(&row.parent2_relation),
                text(&row.ordinal),
            ],
            EntityRow::Attachment(row) => vec![
                Value::Text(row.id.clone()),
                text(&row.reference_id),
                text(&row.filename),
                text(&row.file_info),
                text(&row.detail),
            ],
            EntityRow::Name(row) => vec![
                Value::Text(row.id.clone()),
                text(&row.kind),
                Value::Integer(bool_to_int(row.is_preferred)),
                text(&row.person_id),
                text(&row.given),
                text(&row.surname),
                text(&row.familiar),
                text(&row.title),
                text(&row.display_as),
                self.encode_date(&row.date)?,
            ],
            EntityRow::Fact(row) => vec![
                Value::Text(row.id.clone()),
                text(&row.kind),
                text(&row.reference_id),
                text(&row.place),
                self.encode_date(&row.date)?,
                text(&row.detail),
                text(&row.note_id),
            ],
        };
        Ok(values)
    }
}

impl EntitySink for SqliteUpsertWriter<'_> {
    fn persist(&self, row: &EntityRow) -> RepoResult<()> {
        let spec = table_spec(row.kind());
        let values = self.bind_values(row)?;

        let mut stmt = self.conn.prepare_cached(&upsert_sql(&spec))?;
        stmt.execute(params_from_iter(values))?;
        Ok(())
    }
}

fn ensure_schema(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version = current_version(conn)?;
    if actual_version < expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for kind in EntityKind::ALL {
        let table = table_spec(kind).table;
        let exists: bool = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
            );",
            [table],
            |row| row.get(0),
        )?;
        if !exists {
            return Err(RepoError::MissingRequiredTable(table));
        }
    }

    Ok(())
}

fn text(value: &Option<String>) -> Value {
    match value {
        Some(value) => Value::Text(value.clone()),
        None => Value::Null,
    }
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::{table_spec, upsert_sql};
    use crate::model::row::EntityKind;

    #[test]
    fn upsert_sql_updates_every_non_key_column() {
        let sql = upsert_sql(&table_spec(EntityKind::Source));
        assert_eq!(
            sql,
            "INSERT INTO source (id, detail, title, location) VALUES (?1, ?2, ?3, ?4) \
             ON CONFLICT(id) DO UPDATE SET detail = excluded.detail, \
             title = excluded.title, location = excluded.location;"
        );
    }

    #[test]
    fn name_and_fact_upserts_include_date() {
        for kind in [EntityKind::Name, EntityKind::Fact] {
            let sql = upsert_sql(&table_spec(kind));
            assert!(sql.contains("date = excluded.date"), "{kind}: {sql}");
        }
    }

    #[test]
    fn table_names_are_unique() {
        let mut tables: Vec<_> = EntityKind::ALL
            .iter()
            .map(|kind| table_spec(*kind).table)
            .collect();
        tables.sort_unstable();
        tables.dedup();
        assert_eq!(tables.len(), EntityKind::ALL.len());
    }
}
