//! The fixed table definitions of the exported schema.
//!
//! One entry per table, in dump order. The schema is MySQL/InnoDB with
//! snake_case columns; relations are real foreign keys
//! (`csr_programs.fiscal_year_id` sets NULL on year delete,
//! `activity_implementations.rencana_kegiatan_id` cascades on plan delete).

/// A table of the exported schema: name, `CREATE TABLE` body and the column
/// list its `INSERT` uses.
pub struct Table {
    pub name: &'static str,
    pub create: &'static str,
    pub insert_columns: &'static str,
}

pub const USERS: Table = Table {
    name: "users",
    create: "CREATE TABLE `users` (
  `id` int(11) NOT NULL AUTO_INCREMENT,
  `username` varchar(255) NOT NULL,
  `password_hash` varchar(255) NOT NULL,
  PRIMARY KEY (`id`),
  UNIQUE KEY `username` (`username`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;",
    insert_columns: "`id`, `username`, `password_hash`",
};

/// Slides carry no application-side id; the column is generated on import.
pub const SLIDES: Table = Table {
    name: "slides",
    create: "CREATE TABLE `slides` (
  `id` int(11) NOT NULL AUTO_INCREMENT,
  `image_url` varchar(2048) NOT NULL,
  `title` varchar(255) NOT NULL,
  `description` text,
  PRIMARY KEY (`id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;",
    insert_columns: "`image_url`, `title`, `description`",
};

pub const NEWS_ARTICLES: Table = Table {
    name: "news_articles",
    create: "CREATE TABLE `news_articles` (
  `id` int(11) NOT NULL AUTO_INCREMENT,
  `image_url` varchar(2048) DEFAULT NULL,
  `title` varchar(255) NOT NULL,
  `excerpt` text,
  `publish_date` date DEFAULT NULL,
  PRIMARY KEY (`id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;",
    insert_columns: "`id`, `image_url`, `title`, `excerpt`, `publish_date`",
};

pub const FISCAL_YEARS: Table = Table {
    name: "fiscal_years",
    create: "CREATE TABLE `fiscal_years` (
  `id` int(11) NOT NULL AUTO_INCREMENT,
  `tahun_fiskal` varchar(4) NOT NULL,
  `tanggal_mulai` date NOT NULL,
  `tanggal_selesai` date NOT NULL,
  `total_anggaran` bigint(20) NOT NULL,
  `is_active` tinyint(1) DEFAULT '0',
  PRIMARY KEY (`id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;",
    insert_columns:
        "`id`, `tahun_fiskal`, `tanggal_mulai`, `tanggal_selesai`, `total_anggaran`, `is_active`",
};

pub const CSR_PROGRAMS: Table = Table {
    name: "csr_programs",
    create: "CREATE TABLE `csr_programs` (
  `id` int(11) NOT NULL AUTO_INCREMENT,
  `fiscal_year_id` int(11) DEFAULT NULL,
  `nomor_program` varchar(50) NOT NULL,
  `nama_program` varchar(255) NOT NULL,
  `deskripsi_program` text,
  PRIMARY KEY (`id`),
  UNIQUE KEY `nomor_program` (`nomor_program`),
  KEY `fiscal_year_id` (`fiscal_year_id`),
  CONSTRAINT `csr_programs_ibfk_1` FOREIGN KEY (`fiscal_year_id`) REFERENCES `fiscal_years` (`id`) ON DELETE SET NULL
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;",
    insert_columns: "`id`, `fiscal_year_id`, `nomor_program`, `nama_program`, `deskripsi_program`",
};

pub const CSR_PILARS: Table = Table {
    name: "csr_pilars",
    create: "CREATE TABLE `csr_pilars` (
  `id` int(11) NOT NULL AUTO_INCREMENT,
  `nama_pilar` varchar(100) NOT NULL,
  `deskripsi` text,
  PRIMARY KEY (`id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;",
    insert_columns: "`id`, `nama_pilar`, `deskripsi`",
};

pub const SDGS: Table = Table {
    name: "sdgs",
    create: "CREATE TABLE `sdgs` (
  `id` int(11) NOT NULL AUTO_INCREMENT,
  `goal` varchar(255) NOT NULL,
  `logo_url` varchar(2048) DEFAULT NULL,
  `description` text,
  `indicators` json DEFAULT NULL,
  PRIMARY KEY (`id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;",
    insert_columns: "`id`, `goal`, `logo_url`, `description`, `indicators`",
};

pub const STAKEHOLDER_TYPES: Table = Table {
    name: "stakeholder_types",
    create: "CREATE TABLE `stakeholder_types` (
  `id` int(11) NOT NULL AUTO_INCREMENT,
  `nama_tipe` varchar(100) NOT NULL,
  `deskripsi` text,
  PRIMARY KEY (`id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;",
    insert_columns: "`id`, `nama_tipe`, `deskripsi`",
};

pub const STAKEHOLDER_PROFILES: Table = Table {
    name: "stakeholder_profiles",
    create: "CREATE TABLE `stakeholder_profiles` (
  `id` int(11) NOT NULL AUTO_INCREMENT,
  `nama` varchar(255) NOT NULL,
  `kategori` enum('Internal','Eksternal') NOT NULL,
  `tipe` varchar(100) DEFAULT NULL,
  `deskripsi` text,
  `strategi_komunikasi` text,
  PRIMARY KEY (`id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;",
    insert_columns: "`id`, `nama`, `kategori`, `tipe`, `deskripsi`, `strategi_komunikasi`",
};

pub const ACTIVITY_PLANS: Table = Table {
    name: "activity_plans",
    create: "CREATE TABLE `activity_plans` (
  `id` int(11) NOT NULL AUTO_INCREMENT,
  `pemangku_kepentingan_id` int(11) DEFAULT NULL,
  `program_csr_id` int(11) DEFAULT NULL,
  `bentuk_kegiatan` varchar(255) DEFAULT NULL,
  `tujuan_kegiatan` text,
  `frekuensi` varchar(50) DEFAULT NULL,
  `periode` varchar(50) DEFAULT NULL,
  `anggaran` bigint(20) DEFAULT NULL,
  PRIMARY KEY (`id`),
  KEY `pemangku_kepentingan_id` (`pemangku_kepentingan_id`),
  KEY `program_csr_id` (`program_csr_id`),
  CONSTRAINT `activity_plans_ibfk_1` FOREIGN KEY (`pemangku_kepentingan_id`) REFERENCES `stakeholder_profiles` (`id`),
  CONSTRAINT `activity_plans_ibfk_2` FOREIGN KEY (`program_csr_id`) REFERENCES `csr_programs` (`id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;",
    insert_columns: "`id`, `pemangku_kepentingan_id`, `program_csr_id`, `bentuk_kegiatan`, `tujuan_kegiatan`, `frekuensi`, `periode`, `anggaran`",
};

pub const ACTIVITY_IMPLEMENTATIONS: Table = Table {
    name: "activity_implementations",
    create: "CREATE TABLE `activity_implementations` (
  `id` int(11) NOT NULL AUTO_INCREMENT,
  `rencana_kegiatan_id` int(11) DEFAULT NULL,
  `tanggal_pelaksanaan` date DEFAULT NULL,
  `lokasi` varchar(255) DEFAULT NULL,
  `realisasi_anggaran` bigint(20) DEFAULT NULL,
  `jumlah_peserta` int(11) DEFAULT NULL,
  `hasil_kegiatan` text,
  PRIMARY KEY (`id`),
  KEY `rencana_kegiatan_id` (`rencana_kegiatan_id`),
  CONSTRAINT `activity_implementations_ibfk_1` FOREIGN KEY (`rencana_kegiatan_id`) REFERENCES `activity_plans` (`id`) ON DELETE CASCADE
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;",
    insert_columns: "`id`, `rencana_kegiatan_id`, `tanggal_pelaksanaan`, `lokasi`, `realisasi_anggaran`, `jumlah_peserta`, `hasil_kegiatan`",
};

pub const RISK_LIKELIHOOD_LEVELS: Table = Table {
    name: "risk_likelihood_levels",
    create: "CREATE TABLE `risk_likelihood_levels` (
  `id` int(11) NOT NULL AUTO_INCREMENT,
  `level` int(11) NOT NULL,
  `keterangan` varchar(100) NOT NULL,
  `persentase` varchar(20) DEFAULT NULL,
  PRIMARY KEY (`id`),
  UNIQUE KEY `level` (`level`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;",
    insert_columns: "`id`, `level`, `keterangan`, `persentase`",
};

pub const RISK_IMPACT_LEVELS: Table = Table {
    name: "risk_impact_levels",
    create: "CREATE TABLE `risk_impact_levels` (
  `id` int(11) NOT NULL AUTO_INCREMENT,
  `level` int(11) NOT NULL,
  `dampak` varchar(100) NOT NULL,
  PRIMARY KEY (`id`),
  UNIQUE KEY `level` (`level`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;",
    insert_columns: "`id`, `level`, `dampak`",
};

pub const RISK_LEVELS: Table = Table {
    name: "risk_levels",
    create: "CREATE TABLE `risk_levels` (
  `id` int(11) NOT NULL AUTO_INCREMENT,
  `level` int(11) NOT NULL,
  `tingkat` varchar(100) NOT NULL,
  `deskripsi` text,
  `warna` varchar(50) DEFAULT NULL,
  PRIMARY KEY (`id`),
  UNIQUE KEY `level` (`level`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;",
    insert_columns: "`id`, `level`, `tingkat`, `deskripsi`, `warna`",
};
