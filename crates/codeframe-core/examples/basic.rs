use codeframe_core::{generate_code_image, Options};

#[tokio::main]
async fn main() -> codeframe_core::Result<()> {
    let code = "function helloWorld() {\n  console.log(\"Hello, world!\");\n}\n\nhelloWorld();";

    let options = Options {
        output_path: Some("my-code-snippet.png".into()),
        ..Options::default()
    };
    let path = generate_code_image(code, &options).await?;
    println!("WROTE {}", path.display());
    Ok(())
}
