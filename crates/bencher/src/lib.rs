/// A named raw request fixture fed to the benchmarks.
#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    file: TestFile,
}

impl TestCase {
    pub const fn new(name: &'static str, file: TestFile) -> Self {
        Self { name, file }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn file(&self) -> &TestFile {
        &self.file
    }

    /// Size of the raw request, used as benchmark throughput.
    pub fn size(&self) -> u64 {
        self.file.content.len() as u64
    }
}

#[derive(Debug, Copy, Clone)]
pub struct TestFile {
    content: &'static str,
}

impl TestFile {
    pub const fn new(content: &'static str) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &'static str {
        self.content
    }
}
