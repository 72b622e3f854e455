pub(super) const INSERT_PROPERTY: &str = r#"
    INSERT INTO properties (
        address,
        owner_name,
        owner_phone,
        owner_email,
        boundary,
        area_sqft,
        assessment_value,
        surveyor_id,
        survey_date,
        notes,
        created_at,
        updated_at
    ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
"#;

pub(super) const SELECT_PROPERTY_BY_ID: &str = r#"
    SELECT id,
           address,
           owner_name,
           owner_phone,
           owner_email,
           boundary,
           area_sqft,
           assessment_value,
           surveyor_id,
           survey_date,
           notes,
           created_at,
           updated_at
    FROM properties
    WHERE id = ?1
"#;

pub(super) const SELECT_PROPERTIES: &str = r#"
    SELECT id,
           address,
           owner_name,
           owner_phone,
           owner_email,
           boundary,
           area_sqft,
           assessment_value,
           surveyor_id,
           survey_date,
           notes,
           created_at,
           updated_at
    FROM properties
    ORDER BY created_at DESC, id DESC
"#;

pub(super) const SELECT_PROPERTIES_BY_SURVEYOR: &str = r#"
    SELECT id,
           address,
           owner_name,
           owner_phone,
           owner_email,
           boundary,
           area_sqft,
           assessment_value,
           surveyor_id,
           survey_date,
           notes,
           created_at,
           updated_at
    FROM properties
    WHERE surveyor_id = ?1
    ORDER BY created_at DESC, id DESC
"#;

// SQLite LIKE folds case for ASCII letters only.
pub(super) const SEARCH_PROPERTIES: &str = r#"
    SELECT id,
           address,
           owner_name,
           owner_phone,
           owner_email,
           boundary,
           area_sqft,
           assessment_value,
           surveyor_id,
           survey_date,
           notes,
           created_at,
           updated_at
    FROM properties
    WHERE address LIKE '%' || ?1 || '%' ESCAPE '\'
       OR owner_name LIKE '%' || ?1 || '%' ESCAPE '\'
    ORDER BY created_at DESC, id DESC
    LIMIT ?2
"#;

pub(super) const UPDATE_PROPERTY: &str = r#"
    UPDATE properties
    SET address = ?1,
        owner_name = ?2,
        owner_phone = ?3,
        owner_email = ?4,
        boundary = ?5,
        area_sqft = ?6,
        assessment_value = ?7,
        surveyor_id = ?8,
        survey_date = ?9,
        notes = ?10,
        updated_at = MAX(?11, created_at)
    WHERE id = ?12
"#;

pub(super) const DELETE_PROPERTY: &str = r#"
    DELETE FROM properties
    WHERE id = ?1
"#;

pub(super) const SELECT_PROPERTY_SUMMARY: &str = r#"
    SELECT COUNT(*) AS property_count,
           COALESCE(SUM(area_sqft), 0.0) AS total_area_sqft
    FROM properties
"#;
