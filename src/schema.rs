/// Column-name constants for the dashboard tables.
/// Single source of truth - shared by the table view, the HTML page and the
/// Python bindings.

// ── Metrics table columns ───────────────────────────────────────────────────
pub mod metrics {
    pub const ZONE: &str = "Geopolitical Zone";
    pub const TOTAL_TARGET_AUDIENCE: &str = "Total Target Audience";
    pub const WORKSHOPS_CONDUCTED: &str = "Workshops Conducted";
    pub const CAMPUS_ROADSHOWS: &str = "Campus Roadshows";
    pub const TV_RADIO_CAMPAIGNS: &str = "TV/Radio Campaigns";
    pub const SOCIAL_MEDIA_REACH: &str = "Social Media Reach";
    pub const SMS_CAMPAIGNS: &str = "SMS Campaigns";
    pub const NGO_PARTNERSHIPS: &str = "NGO Partnerships";
    pub const APPLICATION_CONVERSION_RATE: &str = "Application Conversion Rate (%)";

    pub const ALL: [&str; 9] = [
        ZONE,
        TOTAL_TARGET_AUDIENCE,
        WORKSHOPS_CONDUCTED,
        CAMPUS_ROADSHOWS,
        TV_RADIO_CAMPAIGNS,
        SOCIAL_MEDIA_REACH,
        SMS_CAMPAIGNS,
        NGO_PARTNERSHIPS,
        APPLICATION_CONVERSION_RATE,
    ];
}

// ── Map table columns ───────────────────────────────────────────────────────
pub mod coordinates {
    pub const LATITUDE: &str = "lat";
    pub const LONGITUDE: &str = "lon";
    pub const ZONE: &str = "Geopolitical Zone";
    pub const TOTAL_AUDIENCE: &str = "Total Audience";

    pub const ALL: [&str; 4] = [LATITUDE, LONGITUDE, ZONE, TOTAL_AUDIENCE];
}

// ── Heatmap row labels ──────────────────────────────────────────────────────
pub mod heatmap {
    pub const WORKSHOPS: &str = "Workshops";
    pub const ROADSHOWS: &str = "Roadshows";
    pub const TV_RADIO: &str = "TV/Radio";
    pub const SOCIAL_MEDIA: &str = "Social Media";
    pub const SMS: &str = "SMS";
    pub const NGO_PARTNERSHIPS: &str = "NGO Partnerships";

    /// Row order of the activity matrix.
    pub const ROWS: [&str; 6] = [
        WORKSHOPS,
        ROADSHOWS,
        TV_RADIO,
        SOCIAL_MEDIA,
        SMS,
        NGO_PARTNERSHIPS,
    ];
}

// ── Line chart series ───────────────────────────────────────────────────────
pub mod line {
    pub const WORKSHOPS: &str = super::metrics::WORKSHOPS_CONDUCTED;
    pub const ROADSHOWS: &str = super::metrics::CAMPUS_ROADSHOWS;
}

// ── Selector ────────────────────────────────────────────────────────────────
pub mod selection {
    /// Sentinel option meaning "no filter".
    pub const ALL: &str = "All";
}
