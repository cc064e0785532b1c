use crate::database::error::DatabaseError;
use chrono::NaiveDate;
use diesel::prelude::*;
use std::str::FromStr;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::database::schema::member)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct Member {
    #[allow(dead_code)]
    id: i32,
    nis: String,
    surname: String,
    name: String,
    birth_date: Option<String>,
    birth_place: Option<String>,
    birth_prov: Option<String>,
    fiscal_code: Option<String>,
    res_addr: Option<String>,
    res_place: Option<String>,
    res_prov: Option<String>,
}

impl TryFrom<Member> for dto::member::Member {
    type Error = DatabaseError;

    fn try_from(value: Member) -> Result<Self, Self::Error> {
        let birth_date = match value.birth_date {
            Some(birth_date) => Some(NaiveDate::from_str(&birth_date)?),
            None => None,
        };
        Ok(dto::member::Member::new(
            value.nis,
            value.surname,
            value.name,
            birth_date,
            value.birth_place,
            value.birth_prov,
            value.fiscal_code,
            value.res_addr,
            value.res_place,
            value.res_prov,
        ))
    }
}

/// Row to be written, either as a new member or over an existing one.
/// When used as a changeset, `None` fields are left untouched.
#[derive(Insertable, AsChangeset, Debug)]
#[diesel(table_name = crate::database::schema::member)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct MemberRecord<'a> {
    pub(crate) nis: &'a str,
    surname: &'a str,
    name: &'a str,
    birth_date: Option<String>,
    birth_place: Option<&'a str>,
    birth_prov: Option<&'a str>,
    fiscal_code: Option<&'a str>,
    res_addr: Option<&'a str>,
    res_place: Option<&'a str>,
    res_prov: Option<&'a str>,
}

impl<'a> From<&'a dto::member::Member> for MemberRecord<'a> {
    fn from(member: &'a dto::member::Member) -> Self {
        Self {
            nis: member.nis(),
            surname: member.surname(),
            name: member.name(),
            birth_date: member.birth_date().map(|date| date.to_string()),
            birth_place: member.birth_place().as_deref(),
            birth_prov: member.birth_prov().as_deref(),
            fiscal_code: member.fiscal_code().as_deref(),
            res_addr: member.res_addr().as_deref(),
            res_place: member.res_place().as_deref(),
            res_prov: member.res_prov().as_deref(),
        }
    }
}
