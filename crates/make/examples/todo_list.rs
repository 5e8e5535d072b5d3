//! Build a small todo list with components, then print it as HTML

use dom::{Document, DomSerializer};
use make::{args, attrs, Component, Maker, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // <Item done={..}>{label}</Item>
    let item = Component::new("Item", |h, args| {
        let (props, label) = match args.as_slice() {
            [Value::Object(props), rest @ ..] => (props.clone(), rest.to_vec()),
            rest => (Default::default(), rest.to_vec()),
        };
        let done = props.get("done") == Some(&Value::Bool(true));
        let class = if done { "item done" } else { "item" };
        h.make("li".into(), args![attrs! { "class" => class }, label])
    });

    let mut doc = Document::new();
    let mut h = Maker::new(&mut doc);

    let items: Vec<Value> = [("write parser", true), ("write tests", false)]
        .into_iter()
        .map(|(label, done)| {
            h.make(
                item.clone().into(),
                args![attrs! { "done" => done }, label],
            )
            .map(Value::from)
        })
        .collect::<Result<_, _>>()?;

    let list = h.make(
        "ul".into(),
        args![
            attrs! {
                "id" => "todos",
                "$" => attrs! { "dataset" => attrs! { "count" => items.len() } },
            },
            items,
        ],
    )?;

    let html = DomSerializer::new().outer_html(doc.arena(), list)?;
    println!("{}", html);
    println!("properties: {}", serde_json::Value::Object(doc.properties(list)?.clone()));

    Ok(())
}
