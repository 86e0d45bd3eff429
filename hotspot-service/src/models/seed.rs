use super::Hotspot;

/// The four well-known ocean garbage patches used for demonstration data.
pub fn seed_hotspots() -> Vec<Hotspot> {
    vec![
        Hotspot {
            name: "Great Pacific Garbage Patch".to_string(),
            latitude: 31.0,
            longitude: -140.0,
            density: 600.0,
            area_km2: 1_600_000.0,
            description: Some(
                "Largest accumulation of ocean plastic in the North Pacific Gyre".to_string(),
            ),
            collected_kg: 0.0,
            severity: "critical".to_string(),
            tags: tags(&["pacific", "gyre", "macroplastics"]),
        },
        Hotspot {
            name: "North Atlantic Subtropical Gyre".to_string(),
            latitude: 31.0,
            longitude: -60.0,
            density: 300.0,
            area_km2: 1_000_000.0,
            description: Some("High-density accumulation zone in the Atlantic".to_string()),
            collected_kg: 0.0,
            severity: "high".to_string(),
            tags: tags(&["atlantic", "gyre"]),
        },
        Hotspot {
            name: "Indian Ocean Gyre".to_string(),
            latitude: -25.0,
            longitude: 80.0,
            density: 280.0,
            area_km2: 1_200_000.0,
            description: Some("Persistent plastic accumulation region".to_string()),
            collected_kg: 0.0,
            severity: "high".to_string(),
            tags: tags(&["indian", "gyre"]),
        },
        Hotspot {
            name: "South Pacific Gyre".to_string(),
            latitude: -30.0,
            longitude: -120.0,
            density: 200.0,
            area_km2: 800_000.0,
            description: Some("Southern hemisphere accumulation zone".to_string()),
            collected_kg: 0.0,
            severity: "medium".to_string(),
            tags: tags(&["pacific", "south"]),
        },
    ]
}

fn tags(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}
