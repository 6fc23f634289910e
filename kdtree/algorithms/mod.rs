// 2-D 树算法模块
//
// 每个子模块为 KdTree 增加一组操作：
// - insert: 插入（交替分割轴、推导节点矩形）
// - search: 成员查询与矩形范围查询
// - nearest: 最近邻查询
// - debug: 分割不变式校验、JSON 导出和结构打印
// - concurrent: 基于读写锁的并发包装（使用 std::sync）

pub mod concurrent;
pub mod debug;
pub mod insert;
pub mod nearest;
pub mod search;
