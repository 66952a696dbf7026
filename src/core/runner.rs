use crate::adapters::RecordingConsole;
use crate::core::{Console, Demo, Principle, Transcript, TranscriptEntry, Variant};
use crate::utils::error::Result;

pub struct DemoRunner {
    demos: Vec<Box<dyn Demo>>,
    only: Vec<Principle>,
}

impl DemoRunner {
    pub fn new(demos: Vec<Box<dyn Demo>>) -> Self {
        Self {
            demos,
            only: Vec::new(),
        }
    }

    /// Restricts the run to these principles. An empty list runs everything.
    pub fn with_filter(mut self, only: Vec<Principle>) -> Self {
        self.only = only;
        self
    }

    fn selected(&self, principle: Principle) -> bool {
        self.only.is_empty() || self.only.contains(&principle)
    }

    fn for_each_variant<F>(&self, mut f: F) -> Result<()>
    where
        F: FnMut(&dyn Demo, Principle, Variant) -> Result<()>,
    {
        for demo in &self.demos {
            let principle = demo.principle();
            if !self.selected(principle) {
                tracing::debug!("Skipping {}", principle);
                continue;
            }

            for &variant in demo.variants() {
                tracing::info!("▶ {} ({})", principle.title(), variant);
                f(demo.as_ref(), principle, variant)?;
            }
        }
        Ok(())
    }

    pub fn run(&self) -> Result<Transcript> {
        tracing::info!("Running {} demos", self.demos.len());
        let console = RecordingConsole::new();
        let mut transcript = Transcript::default();

        self.for_each_variant(|demo, principle, variant| {
            demo.run(variant, &console)?;

            let lines = console.take();
            tracing::debug!("{} {} produced {} lines", principle, variant, lines.len());
            transcript
                .entries
                .extend(lines.into_iter().map(|line| TranscriptEntry {
                    principle,
                    variant,
                    line,
                }));
            Ok(())
        })?;

        tracing::info!("Collected {} transcript lines", transcript.len());
        Ok(transcript)
    }

    /// Runs the demos straight against `console`, each section under a header line.
    /// Returns the number of sections written.
    pub fn stream(&self, console: &dyn Console) -> Result<usize> {
        let mut sections = 0;
        self.for_each_variant(|demo, principle, variant| {
            if sections > 0 {
                console.log("");
            }
            console.log(&format!("== {} ({}) ==", principle.title(), variant));
            sections += 1;
            demo.run(variant, console)
        })?;
        Ok(sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StdoutConsole;
    use crate::utils::error::DemoError;

    struct EchoDemo {
        principle: Principle,
    }

    impl Demo for EchoDemo {
        fn principle(&self) -> Principle {
            self.principle
        }

        fn variants(&self) -> &'static [Variant] {
            &[Variant::Flawed, Variant::Improved]
        }

        fn run(&self, variant: Variant, console: &dyn Console) -> Result<()> {
            console.log(&format!("{} {}", self.principle, variant));
            Ok(())
        }
    }

    struct FailingDemo;

    impl Demo for FailingDemo {
        fn principle(&self) -> Principle {
            Principle::Isp
        }

        fn variants(&self) -> &'static [Variant] {
            &[Variant::Improved]
        }

        fn run(&self, _variant: Variant, _console: &dyn Console) -> Result<()> {
            Err(DemoError::PersistenceError {
                message: "boom".to_string(),
            })
        }
    }

    fn echo(principle: Principle) -> Box<dyn Demo> {
        Box::new(EchoDemo { principle })
    }

    #[test]
    fn test_tags_lines_with_principle_and_variant() {
        let transcript = DemoRunner::new(vec![echo(Principle::Srp), echo(Principle::Dip)])
            .run()
            .unwrap();

        assert_eq!(transcript.len(), 4);
        assert_eq!(
            transcript.lines_for(Principle::Dip, Variant::Improved),
            vec!["dip improved"]
        );
        assert_eq!(transcript.entries[0].variant, Variant::Flawed);
    }

    #[test]
    fn test_filter_limits_principles() {
        let transcript = DemoRunner::new(vec![echo(Principle::Srp), echo(Principle::Dip)])
            .with_filter(vec![Principle::Dip])
            .run()
            .unwrap();

        assert!(transcript
            .entries
            .iter()
            .all(|e| e.principle == Principle::Dip));
    }

    #[test]
    fn test_stream_writes_headers_and_lines_in_order() {
        let console = RecordingConsole::new();
        let sections = DemoRunner::new(vec![echo(Principle::Ocp)])
            .stream(&console)
            .unwrap();

        assert_eq!(sections, 2);
        assert_eq!(
            console.lines(),
            vec![
                "== Open/Closed (flawed) ==",
                "ocp flawed",
                "",
                "== Open/Closed (improved) ==",
                "ocp improved",
            ]
        );
    }

    #[test]
    fn test_stream_to_stdout() {
        let sections = DemoRunner::new(vec![echo(Principle::Srp), echo(Principle::Dip)])
            .with_filter(vec![Principle::Dip])
            .stream(&StdoutConsole)
            .unwrap();
        assert_eq!(sections, 2);
    }

    #[test]
    fn test_stream_stops_on_demo_error() {
        let console = RecordingConsole::new();
        let result = DemoRunner::new(vec![Box::new(FailingDemo)]).stream(&console);
        assert!(result.is_err());
        assert_eq!(console.lines(), vec!["== Interface Segregation (improved) =="]);
    }

    #[test]
    fn test_demo_error_aborts_run() {
        let result = DemoRunner::new(vec![echo(Principle::Srp), Box::new(FailingDemo)]).run();
        assert!(matches!(result, Err(DemoError::PersistenceError { .. })));
    }
}
