use codeframe_core::{generate_code_image, Options};

#[tokio::main]
async fn main() -> codeframe_core::Result<()> {
    let code = "// Your complex code here...";

    let options = Options {
        background_color: Some("#6c5ce7".to_string()),
        output_path: Some("custom-code-snippet.png".into()),
        width: Some(1400),
        height: Some(1000),
        padding: Some(70.0),
        font_family: Some("Fira Code".to_string()),
        font_size: Some(28.0),
        line_height: Some(1.7),
        terminal_radius: Some(18.0),
        control_button_radius: Some(14.0),
        control_button_spacing: Some(30.0),
        ..Options::default()
    };
    let path = generate_code_image(code, &options).await?;
    println!("WROTE {}", path.display());
    Ok(())
}
