use combobox::ComboOption;

/// Static option store for the demo: a fixed country list.
pub fn countries() -> Vec<ComboOption> {
    [
        ("us", "United States"),
        ("uk", "United Kingdom"),
        ("ca", "Canada"),
        ("au", "Australia"),
        ("de", "Germany"),
        ("fr", "France"),
        ("it", "Italy"),
        ("es", "Spain"),
        ("pt", "Portugal"),
        ("nl", "Netherlands"),
        ("be", "Belgium"),
        ("se", "Sweden"),
        ("no", "Norway"),
        ("dk", "Denmark"),
        ("fi", "Finland"),
        ("jp", "Japan"),
        ("kr", "South Korea"),
        ("cn", "China"),
        ("in", "India"),
        ("br", "Brazil"),
        ("mx", "Mexico"),
        ("ar", "Argentina"),
        ("za", "South Africa"),
        ("nz", "New Zealand"),
    ]
    .into_iter()
    .map(|(id, label)| ComboOption::new(id, label))
    .collect()
}
