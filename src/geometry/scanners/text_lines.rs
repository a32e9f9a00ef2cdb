/// 文本行迭代器
///
/// `BufRead::lines` 只认 `\n` 和 `\r\n`。老式 Mac 导出的 OBJ 只用 `\r` 换行，
/// 这里把 `\n`、`\r\n` 和单独的 `\r` 都当作行结束符。
use std::collections::VecDeque;
use std::io::{self, BufRead};

/// 按 `\n`、`\r\n`、`\r` 拆分的行迭代器
///
/// 每一行单独做 UTF-8 校验，失败时返回 `InvalidData` 错误。
/// 底层读取出错后迭代结束。
pub struct TextLines<R> {
    reader: R,
    pending: VecDeque<Vec<u8>>,
    done: bool,
}

impl<R: BufRead> TextLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for TextLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(
                    String::from_utf8(line)
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
                );
            }

            if self.done {
                return None;
            }

            let mut chunk = Vec::new();
            match self.reader.read_until(b'\n', &mut chunk) {
                Ok(0) => {
                    self.done = true;
                    return None;
                }
                Ok(_) => {
                    if chunk.last() == Some(&b'\n') {
                        chunk.pop();
                    }
                    // `\r\n` 的 `\r`，或文件末尾单独的 `\r`
                    if chunk.last() == Some(&b'\r') {
                        chunk.pop();
                    }
                    self.pending
                        .extend(chunk.split(|&b| b == b'\r').map(<[u8]>::to_vec));
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
