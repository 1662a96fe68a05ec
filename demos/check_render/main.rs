use html_tree::HtmlElement;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let items = HtmlElement::new("ul")
        .with_aliased_child(HtmlElement::new("li").with_text("first"), "first")
        .with_aliased_child(HtmlElement::new("li").with_text("second"), "second");

    let page = HtmlElement::new("div class='page'")
        .with_child(&items)
        .with_child(HtmlElement::new("img").with_attr("src", "logo.png"));

    if let Some(first) = items.get_child("first") {
        println!("first item: {}", first.render());
    }

    page.write_to(&mut std::io::stdout())?;
    println!();

    Ok(())
}
