fn main() {
    // 嵌入清单（申请管理员权限），非 Windows 目标时不做处理
    embed_resource::compile("assets/DevnodeManager.rc", embed_resource::NONE);
}
