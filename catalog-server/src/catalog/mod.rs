//! Catalog engine
//!
//! # 模块结构
//!
//! - [`validator`] - 引用完整性校验 (写入前的存在性检查)
//! - [`tree`] - 由扁平行构建有深度上限的分类森林
//! - [`grouping`] - 按分类聚合商品
//! - [`service`] - [`CatalogService`] 对外门面
//!
//! 数据流: repository → validator → service, repository 查询结果 → tree / grouping → service

pub mod grouping;
pub mod service;
pub mod tree;
pub mod validator;

pub use grouping::group_by_category;
pub use service::CatalogService;
pub use tree::{TREE_DEPTH, build_tree};
