use std::collections::HashMap;

use chrono::NaiveDate;
use shared_types::{
    AppError, CaseResponse, CaseStatus, CreateCaseRequest, CriminalResponse, CriminalStatus,
    Gender, UpdateCaseRequest, Verdict,
};
use sqlx::{Pool, Postgres};

use crate::error_convert::SqlxErrorExt;

#[derive(Debug, sqlx::FromRow)]
struct CaseRow {
    fir_id: i64,
    officer_id: Option<i64>,
    officer_name: Option<String>,
    fir_date: NaiveDate,
    case_status: String,
    crime_type: Option<String>,
    crime_date: Option<NaiveDate>,
    crime_description: Option<String>,
    verdict: String,
    punishment_type: Option<String>,
    punishment_duration_years: Option<i32>,
    punishment_start_date: Option<NaiveDate>,
}

impl CaseRow {
    fn into_response(self, criminals: Vec<CriminalResponse>) -> CaseResponse {
        CaseResponse {
            fir_id: self.fir_id,
            officer_id: self.officer_id,
            officer_name: self.officer_name,
            fir_date: self.fir_date,
            case_status: CaseStatus::from_str_or_default(&self.case_status),
            crime_type: self.crime_type,
            crime_date: self.crime_date,
            crime_description: self.crime_description,
            verdict: Verdict::from_str_or_default(&self.verdict),
            punishment_type: self.punishment_type,
            punishment_duration_years: self.punishment_duration_years,
            punishment_start_date: self.punishment_start_date,
            criminals,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct LinkedCriminalRow {
    fir_id: i64,
    criminal_id: i64,
    name: String,
    age: Option<i32>,
    gender: Option<String>,
    address: Option<String>,
    status: String,
}

impl LinkedCriminalRow {
    fn into_criminal(self) -> CriminalResponse {
        CriminalResponse {
            criminal_id: self.criminal_id,
            name: self.name,
            age: self.age,
            gender: self.gender.as_deref().and_then(Gender::parse),
            address: self.address,
            status: CriminalStatus::from_str_or_default(&self.status),
        }
    }
}

/// Case select with the owning officer's display name resolved.
const CASE_SELECT: &str = r#"
    SELECT f.fir_id, f.officer_id, u.name AS officer_name, f.fir_date, f.case_status,
           f.crime_type, f.crime_date, f.crime_description, f.verdict,
           f.punishment_type, f.punishment_duration_years, f.punishment_start_date
    FROM fir f
    LEFT JOIN police_officer o ON o.officer_id = f.officer_id
    LEFT JOIN users u ON u.user_id = o.user_id
"#;

/// Register a new FIR case and link its criminals in one transaction.
///
/// Links are created only for criminal ids that exist; if none of the
/// requested ids exist the case is rejected rather than registered empty.
pub async fn create(pool: &Pool<Postgres>, req: &CreateCaseRequest) -> Result<CaseResponse, AppError> {
    let mut tx = pool.begin().await.map_err(SqlxErrorExt::into_app_error)?;

    if let Some(officer_id) = req.officer_id {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM police_officer WHERE officer_id = $1)",
        )
        .bind(officer_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;
        if !exists {
            return Err(AppError::bad_request(format!(
                "Officer {officer_id} not found"
            )));
        }
    }

    let fir_id = sqlx::query_scalar::<_, i64>(
        r#"INSERT INTO fir
               (officer_id, fir_date, case_status, crime_type, crime_date,
                crime_description, verdict, punishment_type,
                punishment_duration_years, punishment_start_date)
           VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
           RETURNING fir_id"#,
    )
    .bind(req.officer_id)
    .bind(req.fir_date)
    .bind(req.case_status.unwrap_or_default().as_str())
    .bind(req.crime_type.as_deref())
    .bind(req.crime_date)
    .bind(req.crime_description.as_deref())
    .bind(req.verdict.unwrap_or_default().as_str())
    .bind(req.punishment_type.as_deref())
    .bind(req.punishment_duration_years)
    .bind(req.punishment_start_date)
    .fetch_one(&mut *tx)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let linked = link_criminals(&mut tx, fir_id, &req.criminal_ids).await?;
    if linked == 0 {
        return Err(AppError::bad_request(
            "None of the given criminal ids exist",
        ));
    }

    tx.commit().await.map_err(SqlxErrorExt::into_app_error)?;

    find_by_id(pool, fir_id)
        .await?
        .ok_or_else(|| AppError::internal("Case vanished after insert"))
}

/// Replace the criminal links of a case. Returns the number of rows written.
async fn link_criminals(
    tx: &mut sqlx::Transaction<'_, Postgres>,
    fir_id: i64,
    criminal_ids: &[i64],
) -> Result<u64, AppError> {
    let result = sqlx::query(
        r#"INSERT INTO fir_criminal (fir_id, criminal_id)
           SELECT $1, criminal_id FROM criminal WHERE criminal_id = ANY($2)
           ON CONFLICT DO NOTHING"#,
    )
    .bind(fir_id)
    .bind(criminal_ids)
    .execute(&mut **tx)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected())
}

pub async fn find_by_id(
    pool: &Pool<Postgres>,
    fir_id: i64,
) -> Result<Option<CaseResponse>, AppError> {
    let row = sqlx::query_as::<_, CaseRow>(&format!("{CASE_SELECT} WHERE f.fir_id = $1"))
        .bind(fir_id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    let Some(row) = row else {
        return Ok(None);
    };

    let criminals = sqlx::query_as::<_, LinkedCriminalRow>(
        r#"SELECT fc.fir_id, c.criminal_id, c.name, c.age, c.gender, c.address, c.status
           FROM fir_criminal fc
           JOIN criminal c ON c.criminal_id = fc.criminal_id
           WHERE fc.fir_id = $1
           ORDER BY c.criminal_id ASC"#,
    )
    .bind(fir_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?
    .into_iter()
    .map(LinkedCriminalRow::into_criminal)
    .collect();

    Ok(Some(row.into_response(criminals)))
}

/// List all cases newest first, each with its linked criminals.
pub async fn list(pool: &Pool<Postgres>) -> Result<Vec<CaseResponse>, AppError> {
    let rows = sqlx::query_as::<_, CaseRow>(&format!("{CASE_SELECT} ORDER BY f.fir_id DESC"))
        .fetch_all(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    let links = sqlx::query_as::<_, LinkedCriminalRow>(
        r#"SELECT fc.fir_id, c.criminal_id, c.name, c.age, c.gender, c.address, c.status
           FROM fir_criminal fc
           JOIN criminal c ON c.criminal_id = fc.criminal_id
           ORDER BY c.criminal_id ASC"#,
    )
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    let mut by_case: HashMap<i64, Vec<CriminalResponse>> = HashMap::new();
    for link in links {
        by_case
            .entry(link.fir_id)
            .or_default()
            .push(link.into_criminal());
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let criminals = by_case.remove(&row.fir_id).unwrap_or_default();
            row.into_response(criminals)
        })
        .collect())
}

/// Partial update. When `criminal_ids` is present the link set is replaced
/// wholesale; absent ids keep their existing links.
pub async fn update(
    pool: &Pool<Postgres>,
    fir_id: i64,
    req: &UpdateCaseRequest,
) -> Result<Option<CaseResponse>, AppError> {
    let mut tx = pool.begin().await.map_err(SqlxErrorExt::into_app_error)?;

    let updated = sqlx::query_scalar::<_, i64>(
        r#"UPDATE fir SET
               officer_id                = COALESCE($2, officer_id),
               fir_date                  = COALESCE($3, fir_date),
               case_status               = COALESCE($4, case_status),
               crime_type                = COALESCE($5, crime_type),
               crime_date                = COALESCE($6, crime_date),
               crime_description         = COALESCE($7, crime_description),
               verdict                   = COALESCE($8, verdict),
               punishment_type           = COALESCE($9, punishment_type),
               punishment_duration_years = COALESCE($10, punishment_duration_years),
               punishment_start_date     = COALESCE($11, punishment_start_date)
           WHERE fir_id = $1
           RETURNING fir_id"#,
    )
    .bind(fir_id)
    .bind(req.officer_id)
    .bind(req.fir_date)
    .bind(req.case_status.map(|s| s.as_str()))
    .bind(req.crime_type.as_deref())
    .bind(req.crime_date)
    .bind(req.crime_description.as_deref())
    .bind(req.verdict.map(|v| v.as_str()))
    .bind(req.punishment_type.as_deref())
    .bind(req.punishment_duration_years)
    .bind(req.punishment_start_date)
    .fetch_optional(&mut *tx)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    if updated.is_none() {
        tx.rollback().await.ok();
        return Ok(None);
    }

    if let Some(criminal_ids) = &req.criminal_ids {
        sqlx::query("DELETE FROM fir_criminal WHERE fir_id = $1")
            .bind(fir_id)
            .execute(&mut *tx)
            .await
            .map_err(SqlxErrorExt::into_app_error)?;

        let linked = link_criminals(&mut tx, fir_id, criminal_ids).await?;
        if linked == 0 {
            return Err(AppError::bad_request(
                "None of the given criminal ids exist",
            ));
        }
    }

    tx.commit().await.map_err(SqlxErrorExt::into_app_error)?;

    find_by_id(pool, fir_id).await
}

/// Delete a case. Join rows cascade; criminal records are untouched.
pub async fn delete(pool: &Pool<Postgres>, fir_id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM fir WHERE fir_id = $1")
        .bind(fir_id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(result.rows_affected() > 0)
}
