use html_tree::Attributes;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let attrs: Attributes = r#"width="100px" height='150px' style=color:red"#.parse()?;
    println!("{:#?}", attrs);
    println!("rendered:{}", attrs.render());

    Ok(())
}
