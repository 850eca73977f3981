//! Dump generation: one `.sql` script from a database snapshot.

use std::collections::HashSet;

use chrono::{SecondsFormat, Utc};

use csrdb_core::Kategori;
use csrdb_store::Database;

use crate::ddl::{self, Table};
use crate::escape::{sql_bool, sql_fk, sql_str};

/// Generates the dump with the current UTC time in the header.
pub fn generate_sql_now(db: &Database) -> String {
    generate_sql(db, &Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Generates the full dump script. Pure string building over the snapshot;
/// identical input (including timestamp) yields an identical script.
pub fn generate_sql(db: &Database, generated_at: &str) -> String {
    let mut sql = String::new();

    sql.push_str("-- CSR Application Data Backup\n");
    sql.push_str(&format!("-- Generated on: {generated_at}\n"));
    sql.push_str("--\n-- Database: csr_app_db\n--\n\n");
    sql.push_str("SET NAMES utf8mb4;\nSET FOREIGN_KEY_CHECKS = 0;\n");

    push_table(&mut sql, &ddl::USERS, users_rows(db));
    push_table(&mut sql, &ddl::SLIDES, slides_rows(db));
    push_table(&mut sql, &ddl::NEWS_ARTICLES, news_rows(db));
    push_table(&mut sql, &ddl::FISCAL_YEARS, fiscal_year_rows(db));
    push_table(&mut sql, &ddl::CSR_PROGRAMS, program_rows(db));
    push_table(&mut sql, &ddl::CSR_PILARS, pilar_rows(db));
    push_table(&mut sql, &ddl::SDGS, sdg_rows(db));
    push_table(&mut sql, &ddl::STAKEHOLDER_TYPES, stakeholder_type_rows(db));
    push_table(&mut sql, &ddl::STAKEHOLDER_PROFILES, profile_rows(db));
    push_table(&mut sql, &ddl::ACTIVITY_PLANS, plan_rows(db));
    push_table(
        &mut sql,
        &ddl::ACTIVITY_IMPLEMENTATIONS,
        implementation_rows(db),
    );
    push_table(&mut sql, &ddl::RISK_LIKELIHOOD_LEVELS, likelihood_rows(db));
    push_table(&mut sql, &ddl::RISK_IMPACT_LEVELS, impact_rows(db));
    push_table(&mut sql, &ddl::RISK_LEVELS, risk_level_rows(db));

    sql.push_str("\nSET FOREIGN_KEY_CHECKS = 1;\n");
    sql
}

/// Emits the structure block unconditionally and the data block only when
/// there are rows, so an empty collection still gets its table.
fn push_table(sql: &mut String, table: &Table, rows: Vec<String>) {
    sql.push_str(&format!(
        "\n--\n-- Table structure for table `{0}`\n--\nDROP TABLE IF EXISTS `{0}`;\n{1}\n",
        table.name, table.create
    ));
    if rows.is_empty() {
        return;
    }
    sql.push_str(&format!(
        "\n--\n-- Dumping data for table `{0}`\n--\nLOCK TABLES `{0}` WRITE;\nINSERT INTO `{0}` ({1}) VALUES\n{2};\nUNLOCK TABLES;\n",
        table.name,
        table.insert_columns,
        rows.join(",\n")
    ));
}

// ---------------------------------------------------------------------------
// Row rendering
// ---------------------------------------------------------------------------

fn users_rows(db: &Database) -> Vec<String> {
    db.users
        .iter()
        .map(|u| format!("({}, {}, {})", u.id, sql_str(&u.username), sql_str(&u.password)))
        .collect()
}

fn slides_rows(db: &Database) -> Vec<String> {
    db.slides
        .iter()
        .map(|s| {
            format!(
                "({}, {}, {})",
                sql_str(&s.url),
                sql_str(&s.title),
                sql_str(&s.description)
            )
        })
        .collect()
}

fn news_rows(db: &Database) -> Vec<String> {
    db.news
        .iter()
        .map(|n| {
            format!(
                "({}, {}, {}, {}, {})",
                n.id,
                sql_str(&n.image),
                sql_str(&n.title),
                sql_str(&n.excerpt),
                sql_str(&n.date)
            )
        })
        .collect()
}

fn fiscal_year_rows(db: &Database) -> Vec<String> {
    db.fiscal_years
        .iter()
        .map(|y| {
            format!(
                "({}, {}, {}, {}, {}, {})",
                y.id,
                sql_str(&y.tahun_fiskal),
                sql_str(&y.tanggal_mulai),
                sql_str(&y.tanggal_selesai),
                y.total_anggaran,
                sql_bool(y.is_active)
            )
        })
        .collect()
}

fn program_rows(db: &Database) -> Vec<String> {
    db.programs
        .iter()
        .map(|p| {
            format!(
                "({}, {}, {}, {}, {})",
                p.id,
                p.fiscal_year_id,
                sql_str(&p.nomor_program),
                sql_str(&p.nama_program),
                sql_str(&p.deskripsi_program)
            )
        })
        .collect()
}

fn pilar_rows(db: &Database) -> Vec<String> {
    db.pilars
        .iter()
        .map(|p| {
            format!(
                "({}, {}, {})",
                p.id,
                sql_str(&p.nama_pilar),
                sql_str(&p.deskripsi)
            )
        })
        .collect()
}

fn sdg_rows(db: &Database) -> Vec<String> {
    db.sdgs
        .iter()
        .map(|s| {
            let indicators =
                serde_json::to_string(&s.indicators).unwrap_or_else(|_| "[]".to_string());
            format!(
                "({}, {}, {}, {}, {})",
                s.id,
                sql_str(&s.goal),
                sql_str(&s.logo),
                sql_str(&s.description),
                sql_str(&indicators)
            )
        })
        .collect()
}

fn stakeholder_type_rows(db: &Database) -> Vec<String> {
    db.stakeholder_types
        .iter()
        .map(|t| {
            format!(
                "({}, {}, {})",
                t.id,
                sql_str(&t.nama_tipe),
                sql_str(&t.deskripsi)
            )
        })
        .collect()
}

fn profile_rows(db: &Database) -> Vec<String> {
    db.stakeholder_profiles
        .iter()
        .map(|p| {
            let kategori = match p.kategori {
                Kategori::Internal => "Internal",
                Kategori::Eksternal => "Eksternal",
            };
            format!(
                "({}, {}, {}, {}, {}, {})",
                p.id,
                sql_str(&p.nama),
                sql_str(kategori),
                sql_str(&p.tipe),
                sql_str(&p.deskripsi),
                sql_str(&p.strategi_komunikasi)
            )
        })
        .collect()
}

/// Plan foreign keys are emitted only when the referenced record still
/// exists; a dangling or absent reference becomes NULL so the dump always
/// imports cleanly.
fn plan_rows(db: &Database) -> Vec<String> {
    let profile_ids: HashSet<i64> = db.stakeholder_profiles.iter().map(|p| p.id).collect();
    let program_ids: HashSet<i64> = db.programs.iter().map(|p| p.id).collect();

    db.activity_plans
        .iter()
        .map(|plan| {
            let profile_fk = plan
                .pemangku_kepentingan_id
                .filter(|id| profile_ids.contains(id));
            let program_fk = plan.program_csr_id.filter(|id| program_ids.contains(id));
            format!(
                "({}, {}, {}, {}, {}, {}, {}, {})",
                plan.id,
                sql_fk(profile_fk),
                sql_fk(program_fk),
                sql_str(&plan.bentuk_kegiatan),
                sql_str(&plan.tujuan_kegiatan),
                sql_str(&plan.frekuensi),
                sql_str(&plan.periode),
                plan.anggaran
            )
        })
        .collect()
}

fn implementation_rows(db: &Database) -> Vec<String> {
    db.activity_implementations
        .iter()
        .map(|imp| {
            format!(
                "({}, {}, {}, {}, {}, {}, {})",
                imp.id,
                imp.rencana_kegiatan_id,
                sql_str(&imp.tanggal_pelaksanaan),
                sql_str(&imp.lokasi),
                imp.realisasi_anggaran,
                imp.jumlah_peserta,
                sql_str(&imp.hasil_kegiatan)
            )
        })
        .collect()
}

fn likelihood_rows(db: &Database) -> Vec<String> {
    db.risk_likelihood
        .iter()
        .map(|r| {
            format!(
                "({}, {}, {}, {})",
                r.id,
                r.level,
                sql_str(&r.keterangan),
                sql_str(&r.persentase)
            )
        })
        .collect()
}

fn impact_rows(db: &Database) -> Vec<String> {
    db.risk_impact
        .iter()
        .map(|r| format!("({}, {}, {})", r.id, r.level, sql_str(&r.dampak)))
        .collect()
}

fn risk_level_rows(db: &Database) -> Vec<String> {
    db.risk_levels
        .iter()
        .map(|r| {
            format!(
                "({}, {}, {}, {}, {})",
                r.id,
                r.level,
                sql_str(&r.tingkat),
                sql_str(&r.deskripsi),
                sql_str(&r.warna)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: &str = "2024-08-01T10:00:00.000Z";

    #[test]
    fn dump_covers_all_fourteen_tables() {
        let sql = generate_sql(&Database::seed(), TS);
        for name in [
            "users",
            "slides",
            "news_articles",
            "fiscal_years",
            "csr_programs",
            "csr_pilars",
            "sdgs",
            "stakeholder_types",
            "stakeholder_profiles",
            "activity_plans",
            "activity_implementations",
            "risk_likelihood_levels",
            "risk_impact_levels",
            "risk_levels",
        ] {
            assert!(
                sql.contains(&format!("DROP TABLE IF EXISTS `{name}`;")),
                "missing drop for {name}"
            );
            assert!(
                sql.contains(&format!("CREATE TABLE `{name}` (")),
                "missing create for {name}"
            );
        }
        assert_eq!(sql.matches("CREATE TABLE").count(), 14);
    }

    #[test]
    fn dump_is_wrapped_in_fk_check_toggles() {
        let sql = generate_sql(&Database::seed(), TS);
        assert!(sql.starts_with("-- CSR Application Data Backup\n-- Generated on: 2024-08-01T10:00:00.000Z\n"));
        let off = sql.find("SET FOREIGN_KEY_CHECKS = 0;").unwrap();
        let on = sql.find("SET FOREIGN_KEY_CHECKS = 1;").unwrap();
        assert!(off < on);
        assert!(sql.trim_end().ends_with("SET FOREIGN_KEY_CHECKS = 1;"));
    }

    #[test]
    fn empty_database_emits_schema_but_no_inserts() {
        let sql = generate_sql(&Database::empty(), TS);
        assert_eq!(sql.matches("CREATE TABLE").count(), 14);
        assert!(!sql.contains("INSERT INTO"));
        assert!(!sql.contains("LOCK TABLES"));
    }

    #[test]
    fn seed_dump_inserts_every_collection() {
        let sql = generate_sql(&Database::seed(), TS);
        assert_eq!(sql.matches("INSERT INTO").count(), 14);
        // Slides insert without an id column.
        assert!(sql.contains("INSERT INTO `slides` (`image_url`, `title`, `description`) VALUES"));
        // Users dump the plaintext password into the hash column as-is.
        assert!(sql.contains("(1, 'admin', 'sandi')"));
    }

    #[test]
    fn plan_rows_resolve_fks_or_null() {
        let mut db = Database::seed();
        // Plan 1 references profile 2 and program 101; drop the profile.
        db.stakeholder_profiles.retain(|p| p.id != 2);
        let sql = generate_sql(&db, TS);
        assert!(sql.contains("(1, NULL, 101, 'Sosialisasi & Seleksi'"));
        // Plan 2 keeps both keys.
        assert!(sql.contains("(2, 1, 102, 'Audiensi & Laporan'"));
    }

    #[test]
    fn sdg_indicators_render_as_json_text() {
        let sql = generate_sql(&Database::seed(), TS);
        assert!(sql.contains("'[\"Mengurangi setidaknya setengah proporsi"));
    }

    #[test]
    fn generation_is_deterministic() {
        let db = Database::seed();
        assert_eq!(generate_sql(&db, TS), generate_sql(&db, TS));
    }

    #[test]
    fn quotes_in_data_are_doubled() {
        let mut db = Database::empty();
        db.pilars.push(csrdb_core::CsrPilar {
            id: 1,
            nama_pilar: "O'Reilly".into(),
            deskripsi: "line1\nline2".into(),
        });
        let sql = generate_sql(&db, TS);
        assert!(sql.contains("(1, 'O''Reilly', 'line1\\nline2')"));
    }
}
