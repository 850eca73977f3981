//! The fixed seed dataset used when no snapshot exists (or when the stored
//! blob cannot be read). Contents mirror the production portal's initial
//! data, including the full 17-entry SDG reference list.

use csrdb_core::{
    ActivityImplementation, ActivityPlan, CsrPilar, CsrProgram, FiscalYear, Kategori, NewsArticle,
    RiskImpact, RiskLevel, RiskLikelihood, Sdg, Slide, StakeholderProfile, StakeholderType, User,
};

use crate::database::{Database, NextIds};

impl Database {
    /// The fixed fallback dataset, with counters one past the highest seeded
    /// id of each creatable collection ([`NextIds::SEED`]).
    pub fn seed() -> Database {
        Database {
            users: vec![
                user(1, "admin", "sandi"),
                user(2, "user", "userpass"),
            ],
            slides: vec![
                slide(
                    "https://picsum.photos/1200/500?random=1",
                    "Program Penanaman 1000 Pohon",
                    "Menghijaukan kembali lingkungan untuk masa depan yang lebih baik.",
                ),
                slide(
                    "https://picsum.photos/1200/500?random=2",
                    "Bantuan Pendidikan untuk Anak-Anak",
                    "Memberikan akses pendidikan berkualitas bagi generasi penerus bangsa.",
                ),
                slide(
                    "https://picsum.photos/1200/500?random=3",
                    "Pembangunan Fasilitas Air Bersih",
                    "Memastikan masyarakat mendapatkan akses air bersih yang layak dan sehat.",
                ),
            ],
            news: vec![
                news(
                    1,
                    "https://picsum.photos/400/300?random=4",
                    "Suksesnya Program Bank Sampah Digital",
                    "Program bank sampah yang kami gagas berhasil mengurangi limbah plastik di lingkungan sekitar dan memberikan nilai ekonomis bagi warga.",
                    "2024-07-15",
                ),
                news(
                    2,
                    "https://picsum.photos/400/300?random=5",
                    "Pelatihan Keterampilan untuk Pemuda Lokal",
                    "Kami menyelenggarakan pelatihan digital marketing gratis untuk pemuda-pemudi desa agar siap bersaing di dunia kerja modern.",
                    "2024-07-10",
                ),
                news(
                    3,
                    "https://picsum.photos/400/300?random=6",
                    "Donasi Alat Kesehatan ke Puskesmas Terpencil",
                    "Sebagai bentuk kepedulian, kami mendonasikan berbagai alat kesehatan vital untuk meningkatkan layanan puskesmas di daerah terpencil.",
                    "2024-07-05",
                ),
            ],
            fiscal_years: vec![
                fiscal_year(1, "2022", "2022-01-01", "2022-12-31", 475_000_000, false),
                fiscal_year(2, "2023", "2023-01-01", "2023-12-31", 450_000_000, false),
                fiscal_year(3, "2024", "2024-01-01", "2024-12-31", 5_000_000, true),
            ],
            programs: vec![
                program(
                    101,
                    3,
                    "CSR-24-001",
                    "Beasiswa Pendidikan Merdeka",
                    "Program beasiswa untuk siswa berprestasi dari keluarga kurang mampu di sekitar wilayah operasi perusahaan.",
                ),
                program(
                    102,
                    3,
                    "CSR-24-002",
                    "Klinik Sehat Keliling",
                    "Menyediakan layanan kesehatan gratis bagi masyarakat di daerah terpencil melalui unit klinik mobil.",
                ),
                program(
                    103,
                    2,
                    "CSR-23-001",
                    "Go Green: Tanam 1000 Mangrove",
                    "Program reboisasi kawasan pesisir dengan penanaman 1000 bibit mangrove untuk mencegah abrasi.",
                ),
                program(
                    104,
                    2,
                    "CSR-23-002",
                    "Pelatihan UMKM Digital",
                    "Memberikan pelatihan pemasaran digital kepada pelaku UMKM lokal untuk meningkatkan daya saing.",
                ),
            ],
            pilars: vec![
                pilar(1, "Pendidikan", "Meningkatkan kualitas pendidikan dan akses belajar bagi masyarakat."),
                pilar(2, "Kesehatan", "Meningkatkan akses dan kualitas layanan kesehatan bagi masyarakat."),
                pilar(3, "Lingkungan", "Menjaga kelestarian lingkungan dan mempromosikan pembangunan berkelanjutan."),
                pilar(4, "Pemberdayaan Ekonomi", "Mendorong kemandirian ekonomi masyarakat melalui pelatihan dan pendampingan usaha."),
            ],
            sdgs: seed_sdgs(),
            risk_likelihood: vec![
                likelihood(1, 1, "Sangat Jarang", "< 10%"),
                likelihood(2, 2, "Jarang", "10% - 30%"),
                likelihood(3, 3, "Kadang-kadang", "30% - 50%"),
                likelihood(4, 4, "Sering", "50% - 70%"),
                likelihood(5, 5, "Sangat Sering", "> 70%"),
            ],
            risk_impact: vec![
                impact(1, 1, "Sangat Rendah"),
                impact(2, 2, "Rendah"),
                impact(3, 3, "Sedang"),
                impact(4, 4, "Tinggi"),
                impact(5, 5, "Sangat Tinggi"),
            ],
            risk_levels: vec![
                risk_level(1, 1, "Sangat Rendah", "Risiko dapat diterima tanpa perlu penanganan lebih lanjut.", "bg-blue-500"),
                risk_level(2, 2, "Rendah", "Risiko dapat diterima, namun memerlukan pemantauan.", "bg-green-500"),
                risk_level(3, 3, "Sedang", "Risiko memerlukan tindakan mitigasi untuk menurunkannya.", "bg-yellow-400"),
                risk_level(4, 4, "Tinggi", "Risiko memerlukan perhatian manajemen dan tindakan mitigasi segera.", "bg-orange-500"),
                risk_level(5, 5, "Sangat Tinggi", "Risiko harus dihentikan atau memerlukan tindakan mitigasi yang sangat kuat.", "bg-red-500"),
            ],
            stakeholder_profiles: vec![
                profile(
                    1,
                    "Pemerintah Daerah",
                    Kategori::Eksternal,
                    "Pemerintah",
                    "Regulator dan partner strategis dalam implementasi program di tingkat lokal.",
                    "Audiensi rutin, laporan berkala, dan kolaborasi dalam acara bersama.",
                ),
                profile(
                    2,
                    "Masyarakat Desa Sukamaju",
                    Kategori::Eksternal,
                    "Masyarakat",
                    "Penerima manfaat utama dari program pemberdayaan dan lingkungan.",
                    "Sosialisasi langsung, forum warga, dan pelibatan dalam perencanaan kegiatan.",
                ),
                profile(
                    3,
                    "Karyawan PT Tomo",
                    Kategori::Internal,
                    "Karyawan",
                    "Pelaksana dan sukarelawan dalam berbagai kegiatan CSR.",
                    "Internal memo, buletin CSR, dan program volunteering.",
                ),
                profile(
                    4,
                    "Yayasan Peduli Lingkungan",
                    Kategori::Eksternal,
                    "LSM",
                    "Partner dalam program reboisasi dan pengelolaan sampah.",
                    "Rapat koordinasi proyek, workshop bersama, dan publikasi gabungan.",
                ),
            ],
            stakeholder_types: vec![
                stakeholder_type(1, "Pemerintah", "Entitas pemerintahan, baik pusat maupun daerah."),
                stakeholder_type(2, "LSM", "Lembaga Swadaya Masyarakat atau Non-Governmental Organization (NGO)."),
                stakeholder_type(3, "Masyarakat", "Komunitas atau individu yang tinggal di sekitar wilayah operasi."),
                stakeholder_type(4, "Media", "Institusi media massa, baik cetak, elektronik, maupun digital."),
                stakeholder_type(5, "Investor", "Pemegang saham atau pihak yang menanamkan modal."),
                stakeholder_type(6, "Karyawan", "Seluruh sumber daya manusia internal perusahaan."),
                stakeholder_type(7, "Lainnya", "Tipe lain yang tidak termasuk dalam kategori di atas."),
            ],
            activity_plans: vec![
                // Relations reference stakeholder profile 2 / program 101, etc.
                plan(1, Some(2), Some(101), "Sosialisasi & Seleksi", "Menjaring siswa berprestasi", "1x", "Q1 2024", 15_000_000),
                plan(2, Some(1), Some(102), "Audiensi & Laporan", "Sinergi program kesehatan", "Per Kuartal", "2024", 5_000_000),
                plan(3, Some(4), Some(103), "Kerja Bakti Bersama", "Pelibatan aktif dalam reboisasi", "2x", "Q2 & Q4 2024", 7_500_000),
            ],
            activity_implementations: vec![
                implementation(
                    1,
                    1,
                    "2024-02-15",
                    "Balai Desa Sukamaju",
                    14_500_000,
                    50,
                    "Terjaring 20 siswa potensial untuk seleksi tahap berikutnya. Antusiasme masyarakat sangat tinggi.",
                ),
                implementation(
                    2,
                    3,
                    "2024-04-22",
                    "Pesisir Pantai Harapan",
                    7_000_000,
                    75,
                    "Berhasil menanam 500 bibit mangrove di area seluas 1 hektar. Melibatkan partisipasi aktif dari LSM dan masyarakat.",
                ),
            ],
            next_ids: NextIds::SEED,
        }
    }
}

fn user(id: i64, username: &str, password: &str) -> User {
    User {
        id,
        username: username.into(),
        password: password.into(),
    }
}

fn slide(url: &str, title: &str, description: &str) -> Slide {
    Slide {
        url: url.into(),
        title: title.into(),
        description: description.into(),
    }
}

fn news(id: i64, image: &str, title: &str, excerpt: &str, date: &str) -> NewsArticle {
    NewsArticle {
        id,
        image: image.into(),
        title: title.into(),
        excerpt: excerpt.into(),
        date: date.into(),
    }
}

fn fiscal_year(
    id: i64,
    tahun: &str,
    mulai: &str,
    selesai: &str,
    anggaran: i64,
    active: bool,
) -> FiscalYear {
    FiscalYear {
        id,
        tahun_fiskal: tahun.into(),
        tanggal_mulai: mulai.into(),
        tanggal_selesai: selesai.into(),
        total_anggaran: anggaran,
        is_active: active,
    }
}

fn program(id: i64, fiscal_year_id: i64, nomor: &str, nama: &str, deskripsi: &str) -> CsrProgram {
    CsrProgram {
        id,
        fiscal_year_id,
        nomor_program: nomor.into(),
        nama_program: nama.into(),
        deskripsi_program: deskripsi.into(),
    }
}

fn pilar(id: i64, nama: &str, deskripsi: &str) -> CsrPilar {
    CsrPilar {
        id,
        nama_pilar: nama.into(),
        deskripsi: deskripsi.into(),
    }
}

fn likelihood(id: i64, level: i64, keterangan: &str, persentase: &str) -> RiskLikelihood {
    RiskLikelihood {
        id,
        level,
        keterangan: keterangan.into(),
        persentase: persentase.into(),
    }
}

fn impact(id: i64, level: i64, dampak: &str) -> RiskImpact {
    RiskImpact {
        id,
        level,
        dampak: dampak.into(),
    }
}

fn risk_level(id: i64, level: i64, tingkat: &str, deskripsi: &str, warna: &str) -> RiskLevel {
    RiskLevel {
        id,
        level,
        tingkat: tingkat.into(),
        deskripsi: deskripsi.into(),
        warna: warna.into(),
    }
}

fn profile(
    id: i64,
    nama: &str,
    kategori: Kategori,
    tipe: &str,
    deskripsi: &str,
    strategi: &str,
) -> StakeholderProfile {
    StakeholderProfile {
        id,
        nama: nama.into(),
        kategori,
        tipe: tipe.into(),
        deskripsi: deskripsi.into(),
        strategi_komunikasi: strategi.into(),
    }
}

fn stakeholder_type(id: i64, nama_tipe: &str, deskripsi: &str) -> StakeholderType {
    StakeholderType {
        id,
        nama_tipe: nama_tipe.into(),
        deskripsi: deskripsi.into(),
    }
}

#[allow(clippy::too_many_arguments)]
fn plan(
    id: i64,
    pemangku_kepentingan_id: Option<i64>,
    program_csr_id: Option<i64>,
    bentuk: &str,
    tujuan: &str,
    frekuensi: &str,
    periode: &str,
    anggaran: i64,
) -> ActivityPlan {
    ActivityPlan {
        id,
        pemangku_kepentingan_id,
        program_csr_id,
        bentuk_kegiatan: bentuk.into(),
        tujuan_kegiatan: tujuan.into(),
        frekuensi: frekuensi.into(),
        periode: periode.into(),
        anggaran,
    }
}

#[allow(clippy::too_many_arguments)]
fn implementation(
    id: i64,
    rencana_kegiatan_id: i64,
    tanggal: &str,
    lokasi: &str,
    realisasi: i64,
    peserta: i64,
    hasil: &str,
) -> ActivityImplementation {
    ActivityImplementation {
        id,
        rencana_kegiatan_id,
        tanggal_pelaksanaan: tanggal.into(),
        lokasi: lokasi.into(),
        realisasi_anggaran: realisasi,
        jumlah_peserta: peserta,
        hasil_kegiatan: hasil.into(),
    }
}

fn sdg(id: i64, goal: &str, logo: &str, description: &str, indicators: [&str; 3]) -> Sdg {
    Sdg {
        id,
        goal: goal.into(),
        logo: logo.into(),
        description: description.into(),
        indicators: indicators.iter().map(|s| s.to_string()).collect(),
    }
}

fn seed_sdgs() -> Vec<Sdg> {
    vec![
        sdg(
            1,
            "1. Tanpa Kemiskinan",
            "https://i.ibb.co/GQLF3tq/E-SDG-Icons-01.png",
            "Mengakhiri kemiskinan dalam segala bentuk di mana pun.",
            [
                "Mengurangi setidaknya setengah proporsi laki-laki, perempuan, dan anak-anak dari segala usia, yang hidup dalam kemiskinan.",
                "Menerapkan sistem dan langkah-langkah perlindungan sosial yang tepat secara nasional.",
                "Membangun ketahanan masyarakat miskin dan mereka yang berada dalam situasi rentan.",
            ],
        ),
        sdg(
            2,
            "2. Tanpa Kelaparan",
            "https://i.ibb.co/3Y4Y4z7/E-SDG-Icons-02.png",
            "Mengakhiri kelaparan, mencapai ketahanan pangan dan gizi yang baik, serta meningkatkan pertanian berkelanjutan.",
            [
                "Menjamin akses terhadap pangan yang aman, bergizi, dan cukup bagi semua orang sepanjang tahun.",
                "Mengakhiri segala bentuk malnutrisi.",
                "Menggandakan produktivitas pertanian dan pendapatan produsen makanan skala kecil.",
            ],
        ),
        sdg(
            3,
            "3. Kehidupan Sehat dan Sejahtera",
            "https://i.ibb.co/C0Q3Jbp/E-SDG-Icons-03.png",
            "Memastikan kehidupan yang sehat dan mendukung kesejahteraan bagi semua untuk semua usia.",
            [
                "Mengurangi rasio angka kematian ibu.",
                "Mengakhiri kematian bayi dan balita yang dapat dicegah.",
                "Mengakhiri epidemi AIDS, tuberkulosis, malaria, dan penyakit menular lainnya.",
            ],
        ),
        sdg(
            4,
            "4. Pendidikan Berkualitas",
            "https://i.ibb.co/xLg0xG2/E-SDG-Icons-04.png",
            "Memastikan pendidikan yang inklusif dan berkualitas setara, juga mendukung kesempatan belajar seumur hidup bagi semua.",
            [
                "Memastikan bahwa semua anak perempuan dan laki-laki menyelesaikan pendidikan dasar dan menengah yang gratis, setara, dan berkualitas.",
                "Memastikan bahwa semua anak perempuan dan laki-laki memiliki akses terhadap pengembangan, pengasuhan, dan pendidikan anak usia dini yang berkualitas.",
                "Menghilangkan kesenjangan gender dalam pendidikan.",
            ],
        ),
        sdg(
            5,
            "5. Kesetaraan Gender",
            "https://i.ibb.co/6rC63rZ/E-SDG-Icons-05.png",
            "Mencapai kesetaraan gender dan memberdayakan semua perempuan dan anak perempuan.",
            [
                "Mengakhiri segala bentuk diskriminasi terhadap kaum perempuan di mana pun.",
                "Menghapuskan segala bentuk kekerasan terhadap kaum perempuan di ruang publik dan privat.",
                "Menjamin partisipasi penuh dan efektif, dan kesempatan yang sama untuk kepemimpinan.",
            ],
        ),
        sdg(
            6,
            "6. Air Bersih dan Sanitasi Layak",
            "https://i.ibb.co/2tq2S9C/E-SDG-Icons-06.png",
            "Memastikan ketersediaan dan manajemen air bersih yang berkelanjutan dan sanitasi bagi semua.",
            [
                "Mencapai akses universal dan merata terhadap air minum yang aman dan terjangkau bagi semua.",
                "Mencapai akses terhadap sanitasi dan kebersihan yang memadai dan merata bagi semua.",
                "Meningkatkan kualitas air dengan mengurangi polusi.",
            ],
        ),
        sdg(
            7,
            "7. Energi Bersih dan Terjangkau",
            "https://i.ibb.co/Ycm9v0C/E-SDG-Icons-07.png",
            "Memastikan akses terhadap energi yang terjangkau, dapat diandalkan, berkelanjutan dan modern bagi semua.",
            [
                "Menjamin akses universal terhadap layanan energi yang terjangkau, andal, dan modern.",
                "Meningkatkan secara substansial pangsa energi terbarukan dalam bauran energi global.",
                "Menggandakan tingkat peningkatan efisiensi energi global.",
            ],
        ),
        sdg(
            8,
            "8. Pekerjaan Layak dan Pertumbuhan Ekonomi",
            "https://i.ibb.co/mFGM4H2/E-SDG-Icons-08.png",
            "Mendukung pertumbuhan ekonomi yang inklusif dan berkelanjutan, tenaga kerja penuh dan produktif, dan pekerjaan yang layak bagi semua.",
            [
                "Mempertahankan pertumbuhan ekonomi per kapita sesuai dengan kondisi nasional.",
                "Mencapai tingkat produktivitas ekonomi yang lebih tinggi melalui diversifikasi, peningkatan teknologi dan inovasi.",
                "Menciptakan lapangan kerja yang layak bagi semua perempuan dan laki-laki, termasuk kaum muda dan penyandang disabilitas.",
            ],
        ),
        sdg(
            9,
            "9. Industri, Inovasi, dan Infrastruktur",
            "https://i.ibb.co/SmdTzY1/E-SDG-Icons-09.png",
            "Membangun infrastruktur yang tangguh, meningkatkan industrialisasi inklusif dan berkelanjutan, serta mendorong inovasi.",
            [
                "Membangun infrastruktur berkualitas, andal, berkelanjutan dan tangguh.",
                "Meningkatkan industrialisasi yang inklusif dan berkelanjutan.",
                "Meningkatkan akses industri dan perusahaan skala kecil terhadap jasa keuangan, termasuk kredit terjangkau.",
            ],
        ),
        sdg(
            10,
            "10. Mengurangi Kesenjangan",
            "https://i.ibb.co/hK7sYJ3/E-SDG-Icons-10.png",
            "Mengurangi kesenjangan di dalam dan antar negara.",
            [
                "Secara progresif mencapai dan mempertahankan pertumbuhan pendapatan dari 40 persen populasi yang paling bawah.",
                "Memberdayakan dan meningkatkan inklusi sosial, ekonomi, dan politik bagi semua.",
                "Menjamin kesempatan yang sama dan mengurangi kesenjangan hasil.",
            ],
        ),
        sdg(
            11,
            "11. Kota dan Pemukiman Berkelanjutan",
            "https://i.ibb.co/Wc6Y7dF/E-SDG-Icons-11.png",
            "Membangun kota dan pemukiman manusia yang inklusif, aman, tangguh, dan berkelanjutan.",
            [
                "Menjamin akses bagi semua terhadap perumahan dan pelayanan dasar yang layak, aman dan terjangkau.",
                "Menyediakan akses terhadap sistem transportasi yang aman, terjangkau, mudah diakses dan berkelanjutan bagi semua.",
                "Mengurangi dampak lingkungan perkotaan per kapita yang merugikan.",
            ],
        ),
        sdg(
            12,
            "12. Konsumsi dan Produksi yang Bertanggung Jawab",
            "https://i.ibb.co/Y2gT9zW/E-SDG-Icons-12.png",
            "Memastikan pola konsumsi dan produksi yang berkelanjutan.",
            [
                "Menerapkan Kerangka Kerja 10 Tahun Program tentang Konsumsi dan Produksi Berkelanjutan.",
                "Mencapai pengelolaan sumber daya alam yang berkelanjutan dan efisien.",
                "Mengurangi separuh limbah pangan per kapita global di tingkat ritel dan konsumen.",
            ],
        ),
        sdg(
            13,
            "13. Penanganan Perubahan Iklim",
            "https://i.ibb.co/7K4s9tL/E-SDG-Icons-13.png",
            "Mengambil aksi segera untuk memerangi perubahan iklim dan dampaknya.",
            [
                "Memperkuat ketahanan dan kapasitas adaptasi terhadap bahaya terkait iklim dan bencana alam di semua negara.",
                "Mengintegrasikan tindakan perubahan iklim ke dalam kebijakan, strategi, dan perencanaan nasional.",
                "Meningkatkan pendidikan, penyadaran, serta kapasitas manusia dan kelembagaan mengenai mitigasi dan adaptasi perubahan iklim.",
            ],
        ),
        sdg(
            14,
            "14. Ekosistem Lautan",
            "https://i.ibb.co/pwnvYpS/E-SDG-Icons-14.png",
            "Melestarikan dan memanfaatkan secara berkelanjutan samudra, laut, dan sumber daya kelautan untuk pembangunan berkelanjutan.",
            [
                "Mencegah dan secara signifikan mengurangi segala jenis polusi laut.",
                "Mengelola dan melindungi ekosistem laut dan pesisir secara berkelanjutan.",
                "Mengakhiri penangkapan ikan yang berlebihan, ilegal, tidak dilaporkan dan tidak diatur.",
            ],
        ),
        sdg(
            15,
            "15. Ekosistem Daratan",
            "https://i.ibb.co/9Vz1PCG/E-SDG-Icons-15.png",
            "Melindungi, memulihkan, dan mendukung penggunaan yang berkelanjutan terhadap ekosistem daratan.",
            [
                "Menjamin pelestarian, pemulihan dan pemanfaatan berkelanjutan ekosistem darat dan air tawar.",
                "Mendorong pengelolaan semua jenis hutan secara berkelanjutan, menghentikan deforestasi.",
                "Memerangi penggurunan, memulihkan lahan dan tanah yang terdegradasi.",
            ],
        ),
        sdg(
            16,
            "16. Perdamaian, Keadilan, dan Kelembagaan yang Tangguh",
            "https://i.ibb.co/pznGgnj/E-SDG-Icons-16.png",
            "Mendukung masyarakat yang damai dan inklusif untuk pembangunan berkelanjutan, menyediakan akses terhadap keadilan bagi semua, dan membangun institusi yang efektif, akuntabel, dan inklusif di semua tingkatan.",
            [
                "Secara signifikan mengurangi segala bentuk kekerasan dan tingkat kematian terkait di mana pun.",
                "Mengakhiri pelecehan, eksploitasi, perdagangan, dan segala bentuk kekerasan dan penyiksaan terhadap anak.",
                "Meningkatkan supremasi hukum di tingkat nasional dan internasional dan menjamin akses yang sama terhadap keadilan bagi semua.",
            ],
        ),
        sdg(
            17,
            "17. Kemitraan untuk Mencapai Tujuan",
            "https://i.ibb.co/CKGg0t4/E-SDG-Icons-17.png",
            "Memperkuat sarana pelaksanaan dan merevitalisasi kemitraan global untuk pembangunan berkelanjutan.",
            [
                "Memperkuat mobilisasi sumber daya domestik, termasuk melalui dukungan internasional kepada negara-negara berkembang.",
                "Negara-negara maju untuk mengimplementasikan secara penuh komitmen ODA mereka.",
                "Meningkatkan kerjasama Utara-Selatan, Selatan-Selatan, dan kerjasama regional segitiga dan internasional.",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_expected_collection_sizes() {
        let db = Database::seed();
        assert_eq!(db.users.len(), 2);
        assert_eq!(db.slides.len(), 3);
        assert_eq!(db.news.len(), 3);
        assert_eq!(db.fiscal_years.len(), 3);
        assert_eq!(db.programs.len(), 4);
        assert_eq!(db.pilars.len(), 4);
        assert_eq!(db.sdgs.len(), 17);
        assert_eq!(db.risk_likelihood.len(), 5);
        assert_eq!(db.risk_impact.len(), 5);
        assert_eq!(db.risk_levels.len(), 5);
        assert_eq!(db.stakeholder_profiles.len(), 4);
        assert_eq!(db.stakeholder_types.len(), 7);
        assert_eq!(db.activity_plans.len(), 3);
        assert_eq!(db.activity_implementations.len(), 2);
    }

    #[test]
    fn seed_has_exactly_one_active_fiscal_year() {
        let db = Database::seed();
        let active: Vec<_> = db.fiscal_years.iter().filter(|y| y.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].tahun_fiskal, "2024");
    }

    #[test]
    fn seed_plan_relations_reference_existing_records() {
        let db = Database::seed();
        for plan in &db.activity_plans {
            let profile = plan.pemangku_kepentingan_id.unwrap();
            assert!(db.stakeholder_profiles.iter().any(|p| p.id == profile));
            let program = plan.program_csr_id.unwrap();
            assert!(db.programs.iter().any(|p| p.id == program));
        }
        for imp in &db.activity_implementations {
            assert!(db
                .activity_plans
                .iter()
                .any(|p| p.id == imp.rencana_kegiatan_id));
        }
    }
}
