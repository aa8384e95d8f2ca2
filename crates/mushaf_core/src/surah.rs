//! crates/mushaf_core/src/surah.rs
//!
//! The static surah name table. Upstream sources that only return verse keys
//! (surah:ayah pairs) resolve their display names here; the placeholder page
//! and surah headers use it as well.

use crate::domain::SurahName;

/// All 114 surahs, indexed by `id - 1`. Latin names follow the same
/// transliteration used by the juz labels.
pub static SURAH_NAMES: [SurahName; 114] = [
    SurahName { id: 1, name_arabic: "الفاتحة", name_latin: "Al-Fatihah" },
    SurahName { id: 2, name_arabic: "البقرة", name_latin: "Al-Baqarah" },
    SurahName { id: 3, name_arabic: "آل عمران", name_latin: "Ali 'Imran" },
    SurahName { id: 4, name_arabic: "النساء", name_latin: "An-Nisa'" },
    SurahName { id: 5, name_arabic: "المائدة", name_latin: "Al-Ma'idah" },
    SurahName { id: 6, name_arabic: "الأنعام", name_latin: "Al-An'am" },
    SurahName { id: 7, name_arabic: "الأعراف", name_latin: "Al-A'raf" },
    SurahName { id: 8, name_arabic: "الأنفال", name_latin: "Al-Anfal" },
    SurahName { id: 9, name_arabic: "التوبة", name_latin: "At-Taubah" },
    SurahName { id: 10, name_arabic: "يونس", name_latin: "Yunus" },
    SurahName { id: 11, name_arabic: "هود", name_latin: "Hud" },
    SurahName { id: 12, name_arabic: "يوسف", name_latin: "Yusuf" },
    SurahName { id: 13, name_arabic: "الرعد", name_latin: "Ar-Ra'd" },
    SurahName { id: 14, name_arabic: "إبراهيم", name_latin: "Ibrahim" },
    SurahName { id: 15, name_arabic: "الحجر", name_latin: "Al-Hijr" },
    SurahName { id: 16, name_arabic: "النحل", name_latin: "An-Nahl" },
    SurahName { id: 17, name_arabic: "الإسراء", name_latin: "Al-Isra'" },
    SurahName { id: 18, name_arabic: "الكهف", name_latin: "Al-Kahf" },
    SurahName { id: 19, name_arabic: "مريم", name_latin: "Maryam" },
    SurahName { id: 20, name_arabic: "طه", name_latin: "Ta Ha" },
    SurahName { id: 21, name_arabic: "الأنبياء", name_latin: "Al-Anbiya'" },
    SurahName { id: 22, name_arabic: "الحج", name_latin: "Al-Hajj" },
    SurahName { id: 23, name_arabic: "المؤمنون", name_latin: "Al-Mu'minun" },
    SurahName { id: 24, name_arabic: "النور", name_latin: "An-Nur" },
    SurahName { id: 25, name_arabic: "الفرقان", name_latin: "Al-Furqan" },
    SurahName { id: 26, name_arabic: "الشعراء", name_latin: "Asy-Syu'ara'" },
    SurahName { id: 27, name_arabic: "النمل", name_latin: "An-Naml" },
    SurahName { id: 28, name_arabic: "القصص", name_latin: "Al-Qasas" },
    SurahName { id: 29, name_arabic: "العنكبوت", name_latin: "Al-'Ankabut" },
    SurahName { id: 30, name_arabic: "الروم", name_latin: "Ar-Rum" },
    SurahName { id: 31, name_arabic: "لقمان", name_latin: "Luqman" },
    SurahName { id: 32, name_arabic: "السجدة", name_latin: "As-Sajdah" },
    SurahName { id: 33, name_arabic: "الأحزاب", name_latin: "Al-Ahzab" },
    SurahName { id: 34, name_arabic: "سبأ", name_latin: "Saba'" },
    SurahName { id: 35, name_arabic: "فاطر", name_latin: "Fatir" },
    SurahName { id: 36, name_arabic: "يس", name_latin: "Ya Sin" },
    SurahName { id: 37, name_arabic: "الصافات", name_latin: "As-Saffat" },
    SurahName { id: 38, name_arabic: "ص", name_latin: "Sad" },
    SurahName { id: 39, name_arabic: "الزمر", name_latin: "Az-Zumar" },
    SurahName { id: 40, name_arabic: "غافر", name_latin: "Gafir" },
    SurahName { id: 41, name_arabic: "فصلت", name_latin: "Fussilat" },
    SurahName { id: 42, name_arabic: "الشورى", name_latin: "Asy-Syura" },
    SurahName { id: 43, name_arabic: "الزخرف", name_latin: "Az-Zukhruf" },
    SurahName { id: 44, name_arabic: "الدخان", name_latin: "Ad-Dukhan" },
    SurahName { id: 45, name_arabic: "الجاثية", name_latin: "Al-Jasiyah" },
    SurahName { id: 46, name_arabic: "الأحقاف", name_latin: "Al-Ahqaf" },
    SurahName { id: 47, name_arabic: "محمد", name_latin: "Muhammad" },
    SurahName { id: 48, name_arabic: "الفتح", name_latin: "Al-Fath" },
    SurahName { id: 49, name_arabic: "الحجرات", name_latin: "Al-Hujurat" },
    SurahName { id: 50, name_arabic: "ق", name_latin: "Qaf" },
    SurahName { id: 51, name_arabic: "الذاريات", name_latin: "Az-Zariyat" },
    SurahName { id: 52, name_arabic: "الطور", name_latin: "At-Tur" },
    SurahName { id: 53, name_arabic: "النجم", name_latin: "An-Najm" },
    SurahName { id: 54, name_arabic: "القمر", name_latin: "Al-Qamar" },
    SurahName { id: 55, name_arabic: "الرحمن", name_latin: "Ar-Rahman" },
    SurahName { id: 56, name_arabic: "الواقعة", name_latin: "Al-Waqi'ah" },
    SurahName { id: 57, name_arabic: "الحديد", name_latin: "Al-Hadid" },
    SurahName { id: 58, name_arabic: "المجادلة", name_latin: "Al-Mujadilah" },
    SurahName { id: 59, name_arabic: "الحشر", name_latin: "Al-Hasyr" },
    SurahName { id: 60, name_arabic: "الممتحنة", name_latin: "Al-Mumtahanah" },
    SurahName { id: 61, name_arabic: "الصف", name_latin: "As-Saff" },
    SurahName { id: 62, name_arabic: "الجمعة", name_latin: "Al-Jumu'ah" },
    SurahName { id: 63, name_arabic: "المنافقون", name_latin: "Al-Munafiqun" },
    SurahName { id: 64, name_arabic: "التغابن", name_latin: "At-Tagabun" },
    SurahName { id: 65, name_arabic: "الطلاق", name_latin: "At-Talaq" },
    SurahName { id: 66, name_arabic: "التحريم", name_latin: "At-Tahrim" },
    SurahName { id: 67, name_arabic: "الملك", name_latin: "Al-Mulk" },
    SurahName { id: 68, name_arabic: "القلم", name_latin: "Al-Qalam" },
    SurahName { id: 69, name_arabic: "الحاقة", name_latin: "Al-Haqqah" },
    SurahName { id: 70, name_arabic: "المعارج", name_latin: "Al-Ma'arij" },
    SurahName { id: 71, name_arabic: "نوح", name_latin: "Nuh" },
    SurahName { id: 72, name_arabic: "الجن", name_latin: "Al-Jinn" },
    SurahName { id: 73, name_arabic: "المزمل", name_latin: "Al-Muzzammil" },
    SurahName { id: 74, name_arabic: "المدثر", name_latin: "Al-Muddassir" },
    SurahName { id: 75, name_arabic: "القيامة", name_latin: "Al-Qiyamah" },
    SurahName { id: 76, name_arabic: "الإنسان", name_latin: "Al-Insan" },
    SurahName { id: 77, name_arabic: "المرسلات", name_latin: "Al-Mursalat" },
    SurahName { id: 78, name_arabic: "النبأ", name_latin: "An-Naba'" },
    SurahName { id: 79, name_arabic: "النازعات", name_latin: "An-Nazi'at" },
    SurahName { id: 80, name_arabic: "عبس", name_latin: "'Abasa" },
    SurahName { id: 81, name_arabic: "التكوير", name_latin: "At-Takwir" },
    SurahName { id: 82, name_arabic: "الانفطار", name_latin: "Al-Infitar" },
    SurahName { id: 83, name_arabic: "المطففين", name_latin: "Al-Mutaffifin" },
    SurahName { id: 84, name_arabic: "الانشقاق", name_latin: "Al-Insyiqaq" },
    SurahName { id: 85, name_arabic: "البروج", name_latin: "Al-Buruj" },
    SurahName { id: 86, name_arabic: "الطارق", name_latin: "At-Tariq" },
    SurahName { id: 87, name_arabic: "الأعلى", name_latin: "Al-A'la" },
    SurahName { id: 88, name_arabic: "الغاشية", name_latin: "Al-Gasyiyah" },
    SurahName { id: 89, name_arabic: "الفجر", name_latin: "Al-Fajr" },
    SurahName { id: 90, name_arabic: "البلد", name_latin: "Al-Balad" },
    SurahName { id: 91, name_arabic: "الشمس", name_latin: "Asy-Syams" },
    SurahName { id: 92, name_arabic: "الليل", name_latin: "Al-Lail" },
    SurahName { id: 93, name_arabic: "الضحى", name_latin: "Ad-Duha" },
    SurahName { id: 94, name_arabic: "الشرح", name_latin: "Asy-Syarh" },
    SurahName { id: 95, name_arabic: "التين", name_latin: "At-Tin" },
    SurahName { id: 96, name_arabic: "العلق", name_latin: "Al-'Alaq" },
    SurahName { id: 97, name_arabic: "القدر", name_latin: "Al-Qadr" },
    SurahName { id: 98, name_arabic: "البينة", name_latin: "Al-Bayyinah" },
    SurahName { id: 99, name_arabic: "الزلزلة", name_latin: "Az-Zalzalah" },
    SurahName { id: 100, name_arabic: "العاديات", name_latin: "Al-'Adiyat" },
    SurahName { id: 101, name_arabic: "القارعة", name_latin: "Al-Qari'ah" },
    SurahName { id: 102, name_arabic: "التكاثر", name_latin: "At-Takasur" },
    SurahName { id: 103, name_arabic: "العصر", name_latin: "Al-'Asr" },
    SurahName { id: 104, name_arabic: "الهمزة", name_latin: "Al-Humazah" },
    SurahName { id: 105, name_arabic: "الفيل", name_latin: "Al-Fil" },
    SurahName { id: 106, name_arabic: "قريش", name_latin: "Quraisy" },
    SurahName { id: 107, name_arabic: "الماعون", name_latin: "Al-Ma'un" },
    SurahName { id: 108, name_arabic: "الكوثر", name_latin: "Al-Kausar" },
    SurahName { id: 109, name_arabic: "الكافرون", name_latin: "Al-Kafirun" },
    SurahName { id: 110, name_arabic: "النصر", name_latin: "An-Nasr" },
    SurahName { id: 111, name_arabic: "المسد", name_latin: "Al-Lahab" },
    SurahName { id: 112, name_arabic: "الإخلاص", name_latin: "Al-Ikhlas" },
    SurahName { id: 113, name_arabic: "الفلق", name_latin: "Al-Falaq" },
    SurahName { id: 114, name_arabic: "الناس", name_latin: "An-Nas" },
];

/// Looks up a surah by its 1-based id.
pub fn surah_name(id: u16) -> Option<&'static SurahName> {
    if id < 1 || id > 114 {
        return None;
    }
    Some(&SURAH_NAMES[(id - 1) as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        for (i, s) in SURAH_NAMES.iter().enumerate() {
            assert_eq!(s.id as usize, i + 1);
        }
    }

    #[test]
    fn lookup_bounds() {
        assert!(surah_name(0).is_none());
        assert!(surah_name(115).is_none());
        assert_eq!(surah_name(1).unwrap().name_latin, "Al-Fatihah");
        assert_eq!(surah_name(114).unwrap().name_latin, "An-Nas");
    }
}
