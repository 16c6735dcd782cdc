use anyhow::Result;
use axum_test::TestServer;
use canvas_core::Catalog;
use canvas_server::{AppState, create_app, infra::config::Config};
use serde_json::json;

pub fn fixture_catalog() -> Result<Catalog> {
    let paintings = json!([
        {
            "paintingID": 7,
            "title": "Water Lilies",
            "yearOfWork": 1919,
            "gallery": { "galleryID": 3 },
            "artist": { "artistID": 12 },
            "details": {
                "annotation": {
                    "dominantColors": [
                        { "name": "Pale Green", "web": "#98FB98" },
                        { "name": "Lavender" }
                    ]
                }
            }
        },
        {
            "paintingID": "8",
            "title": "The Starry Night",
            "yearOfWork": "1889",
            "gallery": { "galleryID": "5" },
            "artist": { "artistID": 4 },
            "details": {
                "annotation": {
                    "dominantColors": [
                        { "name": "Dark Slate Blue" },
                        { "name": "Goldenrod" }
                    ]
                }
            }
        },
        {
            "paintingID": 9,
            "title": "Impression, Sunrise",
            "yearOfWork": 1872,
            "gallery": { "galleryID": 3 },
            "artist": { "artistID": 12 }
        },
        {
            "paintingID": 10,
            "title": "Untitled study"
        }
    ]);
    let artists = json!([
        { "artistID": 12, "FirstName": "Claude", "LastName": "Monet", "Nationality": "France" },
        { "artistID": 4, "FirstName": "Vincent", "LastName": "van Gogh", "Nationality": "Netherlands" },
        { "artistID": 30, "FirstName": "Paul", "LastName": "Gauguin", "Nationality": "" }
    ]);
    let galleries = json!([
        { "galleryID": 3, "GalleryName": "Musée Marmottan Monet", "GalleryCountry": "France" },
        { "galleryID": 5, "GalleryName": "Museum of Modern Art", "GalleryCountry": "United States" },
        { "galleryID": 9, "GalleryName": "Musée de Tahiti", "GalleryCountry": "French Polynesia" }
    ]);

    Ok(Catalog::from_json_strs(
        &paintings.to_string(),
        &artists.to_string(),
        &galleries.to_string(),
    )?)
}

pub fn test_server() -> Result<TestServer> {
    let state = AppState::new(fixture_catalog()?, Config::default());
    let server = TestServer::new(create_app(state))?;
    Ok(server)
}
