use super::*;

#[test]
fn program_level_parses_codes_and_names() {
    assert_eq!("g".parse::<ProgramLevel>().unwrap(), ProgramLevel::Graduate);
    assert_eq!(
        "Undergraduate".parse::<ProgramLevel>().unwrap(),
        ProgramLevel::Undergraduate
    );
}

#[test]
fn program_level_rejects_unknown() {
    let err = "phd".parse::<ProgramLevel>().unwrap_err();
    assert!(matches!(err, CoreError::UnknownProgramLevel(ref v) if v == "phd"));
}

#[test]
fn faculty_code_round_trips_through_code() {
    for code in FacultyCode::ALL {
        assert_eq!(code.code().parse::<FacultyCode>().unwrap(), code);
    }
}

#[test]
fn faculty_code_parse_is_case_insensitive() {
    assert_eq!("MEDH".parse::<FacultyCode>().unwrap(), FacultyCode::Medh);
}

#[test]
fn faculty_code_rejects_unknown() {
    let err = "xyz".parse::<FacultyCode>().unwrap_err();
    assert!(matches!(err, CoreError::UnknownFaculty(ref v) if v == "xyz"));
}

#[test]
fn table_has_ten_graduate_and_eleven_undergraduate_faculties() {
    let count = |level| {
        FacultyCode::ALL
            .into_iter()
            .filter(|c| *c != FacultyCode::Common)
            .filter(|c| c.display_name(level).is_some())
            .count()
    };
    assert_eq!(count(ProgramLevel::Graduate), 10);
    assert_eq!(count(ProgramLevel::Undergraduate), 11);
}

#[test]
fn selector_rejects_faculty_not_offered_at_level() {
    let err = FacultySelector::new(ProgramLevel::Undergraduate, FacultyCode::Ene).unwrap_err();
    assert!(matches!(
        err,
        CoreError::FacultyNotOffered { ref code, ref level } if code == "ene" && level == "u"
    ));

    let err = FacultySelector::new(ProgramLevel::Graduate, FacultyCode::L).unwrap_err();
    assert!(matches!(err, CoreError::FacultyNotOffered { .. }));
}

#[test]
fn selector_accepts_common_at_both_levels() {
    assert!(FacultySelector::new(ProgramLevel::Graduate, FacultyCode::Common).is_ok());
    assert!(FacultySelector::new(ProgramLevel::Undergraduate, FacultyCode::Common).is_ok());
}

#[test]
fn selector_display_name_comes_from_table() {
    let sel = FacultySelector::new(ProgramLevel::Graduate, FacultyCode::T).unwrap();
    assert_eq!(sel.display_name(), "工学研究科");
    let sel = FacultySelector::new(ProgramLevel::Undergraduate, FacultyCode::T).unwrap();
    assert_eq!(sel.display_name(), "工学部");
}

#[test]
fn output_file_name_encodes_faculty_then_level() {
    let sel = FacultySelector::new(ProgramLevel::Undergraduate, FacultyCode::Let).unwrap();
    assert_eq!(sel.output_file_name(), "kulasis_let_u.yml");
    assert_eq!(
        FacultySelector::default().output_file_name(),
        "kulasis_common_u.yml"
    );
}

#[test]
fn selector_display_is_level_slash_faculty() {
    let sel = FacultySelector::new(ProgramLevel::Graduate, FacultyCode::Man).unwrap();
    assert_eq!(sel.to_string(), "g/man");
}
