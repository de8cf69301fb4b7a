use app_state::load_app_settings;
use ml_analysis::VisualAnalyzer;
use std::path::Path;
use std::time::Instant;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let settings = load_app_settings()?;
    let now = Instant::now();
    let analyzer = VisualAnalyzer::new(&settings.analyzer)?;
    println!("VisualAnalyzer::new {:?}", now.elapsed());

    let images = vec![
        Path::new("media_dir/tree.jpg"),
        Path::new("media_dir/sunset.jpg"),
    ];

    for image in images {
        let now = Instant::now();
        let analysis = analyzer.analyze_image(image)?;
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        println!("analyzer.analyze_image {:?}", now.elapsed());
    }

    Ok(())
}
