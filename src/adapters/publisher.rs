use crate::core::{Batch, Capability, Multiplex, Transform};
use crate::domain::ports::{BoxPublisher, Publisher};
use crate::utils::error::{ConfigResult, PublishError, PublishResult};
use crate::utils::validation::validate_non_empty_string;
use std::io::{self, Stdout, Write};

/// Separator placed between messages when a batch is combined.
pub const BATCH_DELIMITER: &str = ",";

/// Writes each message as one line to a console-like sink.
pub struct ConsolePublisher<W = Stdout> {
    destination: String,
    writer: W,
}

impl ConsolePublisher<Stdout> {
    pub fn new(destination: &str) -> ConfigResult<Self> {
        Self::with_writer(destination, io::stdout())
    }
}

impl<W: Write> ConsolePublisher<W> {
    pub fn with_writer(destination: &str, writer: W) -> ConfigResult<Self> {
        validate_non_empty_string("destination", destination)?;
        Ok(Self {
            destination: destination.to_string(),
            writer,
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> Capability<String> for ConsolePublisher<W> {
    type Output = ();
    type Error = PublishError;

    fn call(&mut self, msg: String) -> PublishResult<()> {
        let timestamp = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        writeln!(
            self.writer,
            "[{}] Publishing message to {}: {}",
            timestamp, self.destination, msg
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Emits each message as a `tracing` event keyed by destination.
#[derive(Debug, Clone)]
pub struct TracingPublisher {
    destination: String,
}

impl TracingPublisher {
    pub fn new(destination: &str) -> ConfigResult<Self> {
        validate_non_empty_string("destination", destination)?;
        Ok(Self {
            destination: destination.to_string(),
        })
    }
}

impl Capability<String> for TracingPublisher {
    type Output = ();
    type Error = PublishError;

    fn call(&mut self, msg: String) -> PublishResult<()> {
        tracing::info!(destination = %self.destination, message = %msg, "Publishing message");
        Ok(())
    }
}

/// Publisher whose behaviour is an injected callback.
pub struct MockPublisher {
    publish_fn: Box<dyn FnMut(String) -> PublishResult<()>>,
}

impl MockPublisher {
    pub fn new<F>(publish_fn: F) -> Self
    where
        F: FnMut(String) -> PublishResult<()> + 'static,
    {
        Self {
            publish_fn: Box::new(publish_fn),
        }
    }

    /// Accepts every message and sends it nowhere.
    pub fn discard() -> Self {
        Self::new(|_| Ok(()))
    }

    /// Rejects every message.
    pub fn failing() -> Self {
        Self::new(|msg| Err(PublishError::failed(format!("failed to send msg: {}", msg))))
    }
}

impl Capability<String> for MockPublisher {
    type Output = ();
    type Error = PublishError;

    fn call(&mut self, msg: String) -> PublishResult<()> {
        (self.publish_fn)(msg)
    }
}

pub fn transform_publisher<P, F>(publisher: P, transform: F) -> Transform<P, F>
where
    P: Publisher,
    F: Fn(String) -> String,
{
    Transform::new(publisher, transform)
}

pub fn multi_publisher(publishers: Vec<BoxPublisher>) -> Multiplex<String, (), PublishError> {
    Multiplex::new(publishers)
}

pub type BatchPublisher<P> = Batch<P, String, fn(Vec<String>) -> String>;

/// Batches messages and publishes them joined by [`BATCH_DELIMITER`], in
/// arrival order.
pub fn batch_publisher<P: Publisher>(publisher: P, batch_size: usize) -> ConfigResult<BatchPublisher<P>> {
    Batch::new(publisher, batch_size, join_messages as fn(Vec<String>) -> String)
}

fn join_messages(batch: Vec<String>) -> String {
    batch.join(BATCH_DELIMITER)
}

/// Capitalises the first letter of every whitespace-separated word.
pub fn title_case(msg: String) -> String {
    let mut out = String::with_capacity(msg.len());
    let mut at_word_start = true;
    for ch in msg.chars() {
        if at_word_start && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch.is_whitespace();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(sent: Rc<RefCell<Vec<String>>>) -> MockPublisher {
        MockPublisher::new(move |msg| {
            sent.borrow_mut().push(msg);
            Ok(())
        })
    }

    #[test]
    fn test_console_publisher_writes_destination_and_message() {
        let mut publisher = ConsolePublisher::with_writer("dest-1", Vec::new()).unwrap();
        publisher.publish("hello").unwrap();
        assert_eq!(publisher.destination(), "dest-1");

        let output = String::from_utf8(publisher.into_writer()).unwrap();
        assert!(output.starts_with('['));
        assert!(output.ends_with("] Publishing message to dest-1: hello\n"));
    }

    #[test]
    fn test_console_publisher_rejects_empty_destination() {
        assert!(ConsolePublisher::with_writer("", Vec::new()).is_err());
        assert!(TracingPublisher::new(" ").is_err());
    }

    #[test]
    fn test_console_publisher_surfaces_sink_failure() {
        struct ClosedSink;

        impl Write for ClosedSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut publisher = ConsolePublisher::with_writer("dest-1", ClosedSink).unwrap();
        assert!(matches!(publisher.publish("hello"), Err(PublishError::Sink(_))));
    }

    #[test]
    fn test_tracing_publisher_accepts_messages() {
        let mut publisher = TracingPublisher::new("audit-log").unwrap();
        assert!(publisher.publish("hello").is_ok());
    }

    #[test]
    fn test_mock_publisher_variants() {
        assert!(MockPublisher::discard().publish("this-will-not-go-anywhere").is_ok());

        let err = MockPublisher::failing().publish("test").unwrap_err();
        assert_eq!(err.to_string(), "Publish failed: failed to send msg: test");
    }

    #[test]
    fn test_transform_publisher_title_cases() {
        let sent = Rc::new(RefCell::new(Vec::new()));
        let mut publisher = transform_publisher(recording(sent.clone()), title_case);

        publisher.publish("hello wide world").unwrap();
        assert_eq!(*sent.borrow(), vec!["Hello Wide World".to_string()]);
    }

    #[test]
    fn test_batch_publisher_joins_with_delimiter() {
        let sent = Rc::new(RefCell::new(Vec::new()));
        let mut publisher = batch_publisher(recording(sent.clone()), 3).unwrap();

        for i in 0..3 {
            publisher.publish(&format!("msg-{}", i)).unwrap();
        }
        assert_eq!(*sent.borrow(), vec!["msg-0,msg-1,msg-2".to_string()]);
    }

    #[test]
    fn test_batch_publisher_rejects_zero_size() {
        assert!(batch_publisher(MockPublisher::discard(), 0).is_err());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hello".to_string()), "Hello");
        assert_eq!(title_case("two  words".to_string()), "Two  Words");
        assert_eq!(title_case("already Fine".to_string()), "Already Fine");
        assert_eq!(title_case(String::new()), "");
    }
}
