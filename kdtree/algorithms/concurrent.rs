use super::super::kdtree::KdTree;
use crate::error::{KdError, Result};
use crate::geometry::{Point, Rectangle};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// 并发安全的 2-D 树
///
/// KdTree 本身不允许边插入边查询。这个结构体用读写锁包装它：
/// - 读操作（contains, range, nearest, len, is_empty）可以并发执行
/// - 写操作（insert）需要独占访问
///
/// # 示例
///
/// ```
/// use kdplane::{ConcurrentKdTree, Point};
/// use std::thread;
///
/// let tree = ConcurrentKdTree::new();
///
/// let handles: Vec<_> = (0..4).map(|i| {
///     let tree = tree.clone(); // 通过clone共享同一棵树
///     thread::spawn(move || {
///         tree.insert(Point::new(i as f64 / 4.0, 0.5)).unwrap();
///     })
/// }).collect();
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(tree.len().unwrap(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConcurrentKdTree {
    inner: Arc<RwLock<KdTree>>,
}

impl ConcurrentKdTree {
    /// 创建空的并发树
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入一个点，返回是否创建了新节点
    ///
    /// # 错误
    /// 如果锁被毒化，返回 `KdError::LockPoisoned`
    pub fn insert(&self, point: Point) -> Result<bool> {
        let mut tree = self.write_lock()?;
        Ok(tree.insert(point))
    }

    pub fn contains(&self, point: &Point) -> Result<bool> {
        let tree = self.read_lock()?;
        Ok(tree.contains(point))
    }

    /// 范围查询，结果在持锁期间收集成 `Vec`
    pub fn range(&self, query: &Rectangle) -> Result<Vec<Point>> {
        let tree = self.read_lock()?;
        Ok(tree.range(query).collect())
    }

    pub fn nearest(&self, query: &Point) -> Result<Option<Point>> {
        let tree = self.read_lock()?;
        Ok(tree.nearest(query))
    }

    pub fn len(&self) -> Result<usize> {
        let tree = self.read_lock()?;
        Ok(tree.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        let tree = self.read_lock()?;
        Ok(tree.is_empty())
    }

    /// 取出内部的树；仍有其他句柄时返回一份拷贝
    pub fn into_inner(self) -> Result<KdTree> {
        match Arc::try_unwrap(self.inner) {
            Ok(lock) => lock.into_inner().map_err(|_| KdError::LockPoisoned),
            Err(shared) => {
                let tree = shared.read().map_err(|_| KdError::LockPoisoned)?;
                Ok(tree.clone())
            }
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<'_, KdTree>> {
        self.inner.read().map_err(|_| KdError::LockPoisoned)
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<'_, KdTree>> {
        self.inner.write().map_err(|_| KdError::LockPoisoned)
    }
}

impl From<KdTree> for ConcurrentKdTree {
    fn from(tree: KdTree) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }
}
