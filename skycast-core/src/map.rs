/// Windy.com embed URL for the radar/satellite panel, centered and
/// detailed on the same coordinates.
pub fn radar_embed_url(lat: f64, lon: f64) -> String {
    format!(
        "https://embed.windy.com/embed2.html?lat={lat}&lon={lon}\
         &detailLat={lat}&detailLon={lon}&width=650&height=450&zoom=5\
         &level=surface&overlay=radar&product=radar&menu=&message=&marker=\
         &calendar=now&pressure=&type=map&location=coordinates&detail=\
         &metricWind=default&metricTemp=default&radarRange=-1"
    )
}
