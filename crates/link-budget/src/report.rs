//! Link report record
//!
//! The JSON payload a report/export layer renders. Assembly and
//! serialization only; rendering lives outside this crate.

use chrono::{DateTime, Utc};
use serde::Serialize;

use link_geometry::{profile::FresnelResult, ElevationSample};

use crate::{
    signal_quality::SignalQualityAssessment, sizing::SizingBreakdown, LinkGeometry,
};

/// Everything the report template needs for one planned link.
#[derive(Debug, Clone, Serialize)]
pub struct LinkReport {
    pub generated_at: DateTime<Utc>,
    pub site_a: ElevationSample,
    pub site_b: ElevationSample,
    pub geometry: LinkGeometry,
    pub sizing: SizingBreakdown,
    pub fresnel: Option<FresnelResult>,
    pub signal_quality: Option<SignalQualityAssessment>,
}

impl LinkReport {
    pub fn new(
        site_a: ElevationSample,
        site_b: ElevationSample,
        geometry: LinkGeometry,
        sizing: SizingBreakdown,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            site_a,
            site_b,
            geometry,
            sizing,
            fresnel: None,
            signal_quality: None,
        }
    }

    pub fn with_fresnel(mut self, fresnel: FresnelResult) -> Self {
        self.fresnel = Some(fresnel);
        self
    }

    pub fn with_signal_quality(mut self, assessment: SignalQualityAssessment) -> Self {
        self.signal_quality = Some(assessment);
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
