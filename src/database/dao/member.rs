use super::Result;
use crate::database::model::member::{Member, MemberRecord};
use crate::database::schema::member::dsl::{id, member, nis};
use diesel::prelude::*;
use log::debug;

/// First member whose `nis` matches, if any.
pub fn find_by_nis(
    connection: &mut SqliteConnection,
    searched_nis: &str,
) -> Result<Option<dto::member::Member>> {
    let result = member
        .filter(nis.eq(searched_nis))
        .order(id.asc())
        .select(Member::as_select())
        .first(connection)
        .optional()?;

    result.map(dto::member::Member::try_from).transpose()
}

/// The canonical member, i.e. the earliest registered one.
pub fn find_first(connection: &mut SqliteConnection) -> Result<Option<dto::member::Member>> {
    let result = member
        .order(id.asc())
        .select(Member::as_select())
        .first(connection)
        .optional()?;

    result.map(dto::member::Member::try_from).transpose()
}

pub fn insert(connection: &mut SqliteConnection, new_member: &dto::member::Member) -> Result<usize> {
    let record = MemberRecord::from(new_member);
    let count = diesel::insert_into(member)
        .values(&record)
        .execute(connection)?;

    debug!("Inserted member [nis: {}]", record.nis);
    Ok(count)
}

/// Overwrite the member sharing `updated_member`'s `nis`.
/// Optional fields left empty keep their stored value.
pub fn update(
    connection: &mut SqliteConnection,
    updated_member: &dto::member::Member,
) -> Result<usize> {
    let record = MemberRecord::from(updated_member);
    let count = diesel::update(member.filter(nis.eq(record.nis)))
        .set(&record)
        .execute(connection)?;

    debug!("Updated member [nis: {}, rows: {count}]", record.nis);
    Ok(count)
}

#[cfg(test)]
pub fn count_by_nis(connection: &mut SqliteConnection, searched_nis: &str) -> Result<i64> {
    let count = member
        .filter(nis.eq(searched_nis))
        .count()
        .get_result(connection)?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use diesel::prelude::*;
    use dto::member::tests::{giulia_bianchi, mario_rossi};

    fn populate_db(connection: &mut SqliteConnection) -> Vec<dto::member::Member> {
        let expected_members = vec![mario_rossi(), giulia_bianchi()];
        for expected_member in &expected_members {
            super::insert(connection, expected_member).unwrap();
        }

        expected_members
    }

    mod find_by_nis {
        use crate::database::dao::member::find_by_nis;
        use crate::database::with_temp_database;
        use dto::member::tests::{GIULIA_BIANCHI_NIS, giulia_bianchi};

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                super::populate_db(&mut connection);

                let result = find_by_nis(&mut connection, GIULIA_BIANCHI_NIS).unwrap();
                assert_eq!(Some(giulia_bianchi()), result);
            })
        }

        #[test]
        fn none_when_unknown() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                super::populate_db(&mut connection);

                let result = find_by_nis(&mut connection, "UNKNOWN").unwrap();
                assert_eq!(None, result);
            })
        }

        #[test]
        fn none_when_empty() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();

                let result = find_by_nis(&mut connection, GIULIA_BIANCHI_NIS).unwrap();
                assert_eq!(None, result);
            })
        }

        #[test]
        fn fail_when_store_is_broken() {
            crate::database::with_broken_database(|pool| {
                let mut connection = pool.get().unwrap();

                assert!(find_by_nis(&mut connection, GIULIA_BIANCHI_NIS).is_err());
            })
        }
    }

    mod find_first {
        use crate::database::dao::member::find_first;
        use crate::database::with_temp_database;
        use dto::member::tests::mario_rossi;

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                super::populate_db(&mut connection);

                let result = find_first(&mut connection).unwrap();
                assert_eq!(Some(mario_rossi()), result);
            })
        }

        #[test]
        fn none_when_empty() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();

                assert_eq!(None, find_first(&mut connection).unwrap());
            })
        }
    }

    mod insert {
        use crate::database::dao::member::{count_by_nis, find_by_nis, insert};
        use crate::database::with_temp_database;
        use dto::member::tests::{MARIO_ROSSI_NIS, mario_rossi};

        #[test]
        fn success() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();

                let result = insert(&mut connection, &mario_rossi()).unwrap();
                assert_eq!(1, result);
                assert_eq!(
                    Some(mario_rossi()),
                    find_by_nis(&mut connection, MARIO_ROSSI_NIS).unwrap()
                );
            })
        }

        #[test]
        fn fail_when_nis_already_exists() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                insert(&mut connection, &mario_rossi()).unwrap();

                assert!(insert(&mut connection, &mario_rossi()).is_err());
                assert_eq!(1, count_by_nis(&mut connection, MARIO_ROSSI_NIS).unwrap());
            })
        }
    }

    mod update {
        use crate::database::dao::member::{count_by_nis, find_by_nis, update};
        use crate::database::with_temp_database;
        use dto::member::Member;
        use dto::member::tests::{MARIO_ROSSI_NIS, mario_rossi};

        #[test]
        fn success_keeps_unset_optional_fields() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();
                super::populate_db(&mut connection);
                let updated_member = Member::new(
                    MARIO_ROSSI_NIS.to_owned(),
                    "Rossi".to_owned(),
                    "Mario Luigi".to_owned(),
                    None,
                    None,
                    None,
                    None,
                    Some("Via Appia 12".to_owned()),
                    None,
                    None,
                );

                let result = update(&mut connection, &updated_member).unwrap();
                assert_eq!(1, result);

                let stored = find_by_nis(&mut connection, MARIO_ROSSI_NIS)
                    .unwrap()
                    .unwrap();
                let original = mario_rossi();
                assert_eq!("Mario Luigi", stored.name());
                assert_eq!(&Some("Via Appia 12".to_owned()), stored.res_addr());
                assert_eq!(original.birth_date(), stored.birth_date());
                assert_eq!(original.fiscal_code(), stored.fiscal_code());
                assert_eq!(original.res_place(), stored.res_place());
                assert_eq!(1, count_by_nis(&mut connection, MARIO_ROSSI_NIS).unwrap());
            })
        }

        #[test]
        fn nothing_when_unknown() {
            with_temp_database(|pool| {
                let mut connection = pool.get().unwrap();

                assert_eq!(0, update(&mut connection, &mario_rossi()).unwrap());
            })
        }
    }
}
