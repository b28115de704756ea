use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::packing::config::LITERATURE_MIN_SIDE_106;
use crate::packing::{
    resolve, Circle, EngineSettings, LoadError, LoadWarning, Packing, PackingSource,
    PackingStats, RenderPlan,
};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SourceSummary {
    pub source: PackingSource,
    pub expected_count: usize,
    /// Published minimal square side, for display only; the measured box wins.
    pub literature_side: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct SourceListResponse {
    pub square_side: f64,
    pub circle_diameter: f64,
    pub sources: Vec<SourceSummary>,
}

#[derive(Debug, Serialize)]
pub struct PackingResponse {
    pub source: PackingSource,
    pub count: usize,
    pub packing_width: f64,
    pub packing_height: f64,
    pub centers: Vec<Circle>,
    pub warnings: Vec<LoadWarning>,
    pub stats: PackingStats,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    #[serde(flatten)]
    pub plan: RenderPlan,
    /// Informational findings from loading; rendering proceeds regardless.
    pub warnings: Vec<LoadWarning>,
}

/// GET /api/v1/packings
pub async fn handle_list_sources(State(state): State<AppState>) -> Json<SourceListResponse> {
    let sources = PackingSource::ALL
        .into_iter()
        .map(|source| SourceSummary {
            source,
            expected_count: source.expected_count(&state.engine),
            literature_side: (source == PackingSource::Optimal).then_some(LITERATURE_MIN_SIDE_106),
        })
        .collect();

    Json(SourceListResponse {
        square_side: state.config.square_side,
        circle_diameter: state.config.circle_diameter,
        sources,
    })
}

/// GET /api/v1/packings/:source
pub async fn handle_get_packing(
    State(state): State<AppState>,
    Path(source): Path<String>,
) -> Result<Json<PackingResponse>, AppError> {
    let source = parse_source(&source)?;
    let ((packing, stats), warnings) = build_packing(&state, source, move |packing, settings| {
        let stats = PackingStats::of(&packing, &settings.config);
        if !stats.is_non_overlapping(&settings.config) {
            warn!("{source} packing has overlapping circles");
        }
        (packing, stats)
    })
    .await?;

    Ok(Json(PackingResponse {
        source,
        count: packing.len(),
        packing_width: packing.packing_width,
        packing_height: packing.packing_height,
        centers: packing.centers,
        warnings,
        stats,
    }))
}

/// GET /api/v1/packings/:source/render
pub async fn handle_get_render_plan(
    State(state): State<AppState>,
    Path(source): Path<String>,
) -> Result<Json<RenderResponse>, AppError> {
    let source = parse_source(&source)?;
    let (plan, warnings) = build_packing(&state, source, move |packing, settings| {
        let plan = RenderPlan::for_packing(&packing, &settings.config);
        if !plan.fits_square() {
            warn!("{source} packing does not fit the reference square");
        }
        plan
    })
    .await?;

    Ok(Json(RenderResponse { plan, warnings }))
}

fn parse_source(raw: &str) -> Result<PackingSource, AppError> {
    raw.parse::<PackingSource>()
        .map_err(|e| AppError::Validation(e.to_string()))
}

/// Resolves `source` and runs `finish` on it, all on a blocking thread: the
/// optimal source reads a file and has no row limit.
async fn build_packing<T, F>(
    state: &AppState,
    source: PackingSource,
    finish: F,
) -> Result<(T, Vec<LoadWarning>), AppError>
where
    T: Send + 'static,
    F: FnOnce(Packing, &EngineSettings) -> T + Send + 'static,
{
    let settings = Arc::clone(&state.engine);
    let outcome = tokio::task::spawn_blocking(move || {
        let report = resolve(source, &settings);
        if report.is_empty() && report.error.is_none() {
            warn!("{} produced no circles", report.source);
        }
        let (packing, warnings) = report.into_result()?;

        if !packing.fits_bounds(settings.config.radius()) {
            warn!("{source} packing has discs outside its bounding box");
        }
        info!(
            "Built {source} packing: {} circles, {:.3} x {:.3}",
            packing.len(),
            packing.packing_width,
            packing.packing_height
        );
        Ok::<_, LoadError>((finish(packing, &settings), warnings))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("packing task failed: {e}")))?;

    outcome.map_err(AppError::from)
}
