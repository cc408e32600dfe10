//! # Embedded Dataset
//!
//! Education profiles compiled into the crate.
//!
//! Stage names follow the four broad educational stages (early childhood,
//! primary, secondary, tertiary); the ISCED level tells lower and upper
//! secondary apart, and the local names carry each country's own terms.
//! Ages are approximate and follow UNESCO's ISCED mappings for the
//! mainstream track of each system.
//!
//! Levels 4 and 5 are not recorded for any country.

use crate::isced::IscedLevel;
use crate::types::{CountryEducationProfile, Grade, Stage};

/// Build every embedded profile, in no particular order.
pub(crate) fn builtin_profiles() -> Vec<CountryEducationProfile> {
    vec![
        united_states(),
        united_kingdom(),
        france(),
        germany(),
        japan(),
        vietnam(),
    ]
}

/// A stage named after the broad stage of its ISCED level.
fn stage(level: IscedLevel, start: u8, end: u8, local_names: &[&str]) -> Stage {
    Stage::new(level.broad_stage().name())
        .with_isced(level)
        .with_ages(start, end)
        .with_local_names(local_names.iter().copied())
}

/// Consecutive one-year grades, the first one starting at `first_age`.
fn numbered_grades<N, S>(
    levels: std::ops::RangeInclusive<i8>,
    first_age: u8,
    name: N,
    short: S,
) -> Vec<Grade>
where
    N: Fn(i8) -> String,
    S: Fn(i8) -> Option<String>,
{
    let first = *levels.start();
    levels
        .map(|level| {
            let age = first_age.saturating_add(level.saturating_sub(first) as u8);
            let grade = Grade::new(level, name(level), age);
            match short(level) {
                Some(s) => grade.with_short_name(s),
                None => grade,
            }
        })
        .collect()
}

/// Grades from a list of `(name, short name)` pairs.
fn named_grades(first_level: i8, first_age: u8, names: &[(&str, &str)]) -> Vec<Grade> {
    let mut level = first_level;
    let mut age = first_age;
    let mut grades = Vec::with_capacity(names.len());
    for (name, short) in names {
        grades.push(Grade::new(level, *name, age).with_short_name(*short));
        level = level.saturating_add(1);
        age = age.saturating_add(1);
    }
    grades
}

// =============================================================================
// COUNTRIES
// =============================================================================

fn united_states() -> CountryEducationProfile {
    use IscedLevel::*;

    CountryEducationProfile::new("US", "United States")
        .with_stages(vec![
            stage(Level0, 3, 6, &["Preschool", "Pre-kindergarten", "Kindergarten"]),
            stage(Level1, 6, 11, &["Elementary school", "Grade school"]),
            stage(Level2, 11, 14, &["Middle school", "Junior high school"]),
            stage(Level3, 14, 18, &["High school", "Senior high school"]),
            stage(Level6, 18, 22, &["College", "University", "Bachelor's degree"]),
            stage(Level7, 22, 24, &["Graduate school", "Master's degree"]),
            stage(Level8, 24, 28, &["Doctoral program", "PhD"]),
        ])
        .with_grades(named_grades(
            -1,
            4,
            &[
                ("Pre-kindergarten", "Pre-K"),
                ("Kindergarten", "K"),
                ("First grade", "1st"),
                ("Second grade", "2nd"),
                ("Third grade", "3rd"),
                ("Fourth grade", "4th"),
                ("Fifth grade", "5th"),
                ("Sixth grade", "6th"),
                ("Seventh grade", "7th"),
                ("Eighth grade", "8th"),
                ("Ninth grade", "9th"),
                ("Tenth grade", "10th"),
                ("Eleventh grade", "11th"),
                ("Twelfth grade", "12th"),
            ],
        ))
}

fn united_kingdom() -> CountryEducationProfile {
    use IscedLevel::*;

    let mut grades = vec![
        Grade::new(-1, "Nursery", 3).with_short_name("N"),
        Grade::new(0, "Reception", 4).with_short_name("R"),
    ];
    grades.extend(numbered_grades(
        1..=13,
        5,
        |y| format!("Year {}", y),
        |y| Some(format!("Y{}", y)),
    ));

    CountryEducationProfile::new("GB", "United Kingdom")
        .with_stages(vec![
            stage(Level0, 3, 5, &["Nursery school", "Pre-school"]),
            stage(Level1, 5, 11, &["Primary school", "Infant school", "Junior school"]),
            stage(Level2, 11, 16, &["Secondary school", "Comprehensive school"]),
            stage(Level3, 16, 18, &["Sixth form", "Sixth form college"]),
            stage(Level6, 18, 21, &["University", "Bachelor's degree"]),
            stage(Level7, 21, 22, &["Master's degree", "Postgraduate"]),
            stage(Level8, 22, 25, &["Doctorate", "PhD"]),
        ])
        .with_grades(grades)
}

fn france() -> CountryEducationProfile {
    use IscedLevel::*;

    CountryEducationProfile::new("FR", "France")
        .with_stages(vec![
            stage(Level0, 3, 6, &["École maternelle"]),
            stage(Level1, 6, 11, &["École élémentaire", "École primaire"]),
            stage(Level2, 11, 15, &["Collège"]),
            stage(Level3, 15, 18, &["Lycée", "Lycée professionnel"]),
            stage(Level6, 18, 21, &["Licence", "Université"]),
            stage(Level7, 21, 23, &["Master"]),
            stage(Level8, 23, 26, &["Doctorat"]),
        ])
        .with_grades(named_grades(
            -2,
            3,
            &[
                ("Petite section", "PS"),
                ("Moyenne section", "MS"),
                ("Grande section", "GS"),
                ("Cours préparatoire", "CP"),
                ("Cours élémentaire 1", "CE1"),
                ("Cours élémentaire 2", "CE2"),
                ("Cours moyen 1", "CM1"),
                ("Cours moyen 2", "CM2"),
                ("Sixième", "6e"),
                ("Cinquième", "5e"),
                ("Quatrième", "4e"),
                ("Troisième", "3e"),
                ("Seconde", "2de"),
                ("Première", "1re"),
                ("Terminale", "Tle"),
            ],
        ))
}

fn germany() -> CountryEducationProfile {
    use IscedLevel::*;

    CountryEducationProfile::new("DE", "Germany")
        .with_stages(vec![
            stage(Level0, 3, 6, &["Kindergarten", "Kita"]),
            stage(Level1, 6, 10, &["Grundschule"]),
            stage(
                Level2,
                10,
                16,
                &["Hauptschule", "Realschule", "Gymnasium", "Sekundarstufe I"],
            ),
            stage(
                Level3,
                16,
                19,
                &["Gymnasiale Oberstufe", "Berufsschule", "Sekundarstufe II"],
            ),
            stage(Level6, 19, 22, &["Bachelor", "Hochschule", "Universität"]),
            stage(Level7, 22, 24, &["Master"]),
            stage(Level8, 24, 27, &["Promotion"]),
        ])
        .with_grades(numbered_grades(1..=13, 6, |k| format!("Klasse {}", k), |_| None))
}

fn japan() -> CountryEducationProfile {
    use IscedLevel::*;

    let mut grades = numbered_grades(
        1..=6,
        6,
        |y| format!("Shōgakkō {}-nensei", y),
        |y| Some(format!("小{}", y)),
    );
    grades.extend(numbered_grades(
        7..=9,
        12,
        |y| format!("Chūgakkō {}-nensei", y - 6),
        |y| Some(format!("中{}", y - 6)),
    ));
    grades.extend(numbered_grades(
        10..=12,
        15,
        |y| format!("Kōtōgakkō {}-nensei", y - 9),
        |y| Some(format!("高{}", y - 9)),
    ));

    CountryEducationProfile::new("JP", "Japan")
        .with_stages(vec![
            stage(Level0, 3, 6, &["Yōchien", "Hoikuen"]),
            stage(Level1, 6, 12, &["Shōgakkō"]),
            stage(Level2, 12, 15, &["Chūgakkō"]),
            stage(Level3, 15, 18, &["Kōtōgakkō"]),
            stage(Level6, 18, 22, &["Daigaku"]),
            stage(Level7, 22, 24, &["Shūshi katei"]),
            stage(Level8, 24, 27, &["Hakushi katei"]),
        ])
        .with_grades(grades)
}

fn vietnam() -> CountryEducationProfile {
    use IscedLevel::*;

    CountryEducationProfile::new("VN", "Vietnam")
        .with_stages(vec![
            stage(Level0, 3, 6, &["Mầm non", "Mẫu giáo"]),
            stage(Level1, 6, 11, &["Tiểu học"]),
            stage(Level2, 11, 15, &["Trung học cơ sở"]),
            stage(Level3, 15, 18, &["Trung học phổ thông"]),
            stage(Level6, 18, 22, &["Đại học"]),
            stage(Level7, 22, 24, &["Thạc sĩ"]),
            stage(Level8, 24, 27, &["Tiến sĩ"]),
        ])
        .with_grades(numbered_grades(1..=12, 6, |l| format!("Lớp {}", l), |_| None))
}

// =============================================================================
// TESTS
// =============================================================================
