//! Atmospheric signal-quality assessment
//!
//! Heuristic installation guidance from a current-weather snapshot.
//! Consumes plain numbers handed over by the external weather
//! collaborator; no fetching happens here.

use serde::{Deserialize, Serialize};

/// Current-weather snapshot at the installation site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericConditions {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
    pub pressure_hpa: f64,
    pub cloud_cover_pct: f64,
    pub visibility_km: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// One actionable installation hint tied to a weather condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub title: String,
    pub description: String,
}

/// Signal quality estimate with the conditions that degraded it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalQualityAssessment {
    /// 20-100; starts at 100 and loses fixed penalties per condition
    pub quality_pct: f64,
    pub recommendations: Vec<Recommendation>,
}

/// Assess signal quality for the given conditions.
pub fn assess(wx: &AtmosphericConditions) -> SignalQualityAssessment {
    let mut recommendations = Vec::new();
    let mut quality: f64 = 100.0;

    if wx.humidity_pct > 80.0 {
        recommendations.push(Recommendation {
            severity: Severity::Medium,
            title: "High humidity".to_string(),
            description: "Humidity above 80% can cost 2-4% of signal; consider raising transmit power.".to_string(),
        });
        quality -= 4.0;
    }

    if wx.wind_speed_kmh > 30.0 {
        recommendations.push(Recommendation {
            severity: Severity::High,
            title: "Strong wind".to_string(),
            description: format!(
                "Wind at {:.0} km/h; check the stability of the antenna mount.",
                wx.wind_speed_kmh
            ),
        });
        quality -= 10.0;
    }

    if wx.cloud_cover_pct > 70.0 {
        recommendations.push(Recommendation {
            severity: Severity::Low,
            title: "Heavy cloud cover".to_string(),
            description: "Cloud cover above 70% may attenuate the signal by 1-2%.".to_string(),
        });
        quality -= 2.0;
    }

    if wx.temperature_c < -10.0 || wx.temperature_c > 40.0 {
        recommendations.push(Recommendation {
            severity: Severity::Medium,
            title: "Extreme temperature".to_string(),
            description: format!(
                "{:.0} C is outside the comfortable range for RF electronics.",
                wx.temperature_c
            ),
        });
        quality -= 5.0;
    }

    SignalQualityAssessment {
        quality_pct: quality.max(20.0),
        recommendations,
    }
}
