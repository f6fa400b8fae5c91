use capability_chain::utils::logger;
use capability_chain::{
    batch_publisher, multi_publisher, title_case, transform_publisher, CapabilityExt,
    ConsolePublisher, MockPublisher, Publisher,
};

fn main() -> anyhow::Result<()> {
    logger::init_logger();

    // A plain publisher printing to stdout
    let mut dest_1 = ConsolePublisher::new("dest-1")?;
    dest_1.publish("hello")?;

    // A mock that sends messages nowhere
    let mut nowhere = MockPublisher::discard();
    nowhere.publish("this-will-not-go-anywhere")?;

    // Messages are title-cased before reaching dest-1
    let mut titled = transform_publisher(ConsolePublisher::new("dest-1")?, title_case);
    titled.publish("hello")?;

    // One publish fans out to every wrapped publisher in order
    let mut everywhere = multi_publisher(vec![
        ConsolePublisher::new("dest-1")?.boxed(),
        MockPublisher::discard().boxed(),
        transform_publisher(ConsolePublisher::new("dest-1")?, title_case).boxed(),
        ConsolePublisher::new("dest-2")?.boxed(),
    ]);
    everywhere.publish("test")?;

    // Three messages go out as one
    let mut batched = batch_publisher(ConsolePublisher::new("dest-1")?, 3)?;
    for i in 0..3 {
        batched.publish(&format!("msg-{}", i))?;
    }

    // A mock that always fails
    let mut broken = MockPublisher::failing();
    if let Err(e) = broken.publish("test") {
        println!("Received error as expected: {}", e);
    }

    tracing::info!("Publisher walkthrough finished");
    Ok(())
}
