#![allow(dead_code)]

use std::cell::Cell;
use std::sync::{Arc, Mutex};

use handler_core::{Handler, HandlerList, HandlerRequest, HandlerString, Request, Response};

thread_local! {
    static RELEASED: Cell<usize> = const { Cell::new(0) };
}

/// Release routine for requests whose memory the test owns: it only counts.
pub unsafe extern "C" fn count_release(_req: *mut HandlerRequest) {
    RELEASED.with(|c| c.set(c.get() + 1));
}

pub fn released() -> usize {
    RELEASED.with(|c| c.get())
}

/// A request laid out exactly as a C caller would, backed by test-owned
/// buffers.
pub struct ForeignFixture {
    pub header_bytes: Vec<Vec<u8>>,
    pub param_bytes: Vec<Vec<u8>>,
    header_records: Vec<HandlerString>,
    param_records: Vec<HandlerString>,
    pub raw: HandlerRequest,
}

impl ForeignFixture {
    pub fn new(headers: &[&str], params: &[&str]) -> Box<Self> {
        let mut fixture = Box::new(ForeignFixture {
            header_bytes: headers.iter().map(|s| s.as_bytes().to_vec()).collect(),
            param_bytes: params.iter().map(|s| s.as_bytes().to_vec()).collect(),
            header_records: Vec::new(),
            param_records: Vec::new(),
            raw: HandlerRequest {
                headers: HandlerList::empty(),
                params: HandlerList::empty(),
            },
        });

        fixture.header_records = records(&mut fixture.header_bytes);
        fixture.param_records = records(&mut fixture.param_bytes);
        fixture.raw.headers = list(&mut fixture.header_records);
        fixture.raw.params = list(&mut fixture.param_records);
        fixture
    }

    pub fn raw_ptr(&mut self) -> *mut HandlerRequest {
        &mut self.raw
    }

    /// Overwrite every foreign byte, as a caller reusing its buffers would.
    pub fn scribble(&mut self) {
        for buf in self.header_bytes.iter_mut().chain(self.param_bytes.iter_mut()) {
            buf.iter_mut().for_each(|b| *b = b'#');
        }
    }
}

fn records(buffers: &mut [Vec<u8>]) -> Vec<HandlerString> {
    buffers
        .iter_mut()
        .map(|b| HandlerString {
            ptr: b.as_mut_ptr(),
            len: b.len() as u32,
        })
        .collect()
}

fn list(records: &mut Vec<HandlerString>) -> HandlerList<HandlerString> {
    if records.is_empty() {
        return HandlerList::empty();
    }
    HandlerList {
        ptr: records.as_mut_ptr(),
        len: records.len() as u32,
    }
}

/// Answers with a fixed status and keeps every request it saw.
#[derive(Clone)]
pub struct RecordingHandler {
    pub status: u32,
    pub seen: Arc<Mutex<Vec<Request>>>,
}

impl RecordingHandler {
    pub fn new(status: u32) -> Self {
        Self {
            status,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn seen(&self) -> Vec<Request> {
        self.seen.lock().unwrap().clone()
    }
}

impl Handler for RecordingHandler {
    fn handle(&self, req: Request) -> Response {
        self.seen.lock().unwrap().push(req);
        Response::new(self.status)
    }
}

pub struct PanickingHandler;

impl Handler for PanickingHandler {
    fn handle(&self, _req: Request) -> Response {
        panic!("handler exploded")
    }
}
