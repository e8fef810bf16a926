//! Seed records shown on first run and after a reset. Each page falls back
//! to these whenever its data file is missing or unreadable.

use crate::models::*;

pub fn invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "INV-001".into(),
            client: "شركة الأمل التجارية".into(),
            amount: 15000.0,
            paid: 15000.0,
            due: 0.0,
            status: "مدفوعة".into(),
            date: "2026-01-15".into(),
            due_date: "2026-02-15".into(),
        },
        Invoice {
            id: "INV-002".into(),
            client: "مؤسسة النور للتجارة".into(),
            amount: 8500.0,
            paid: 0.0,
            due: 8500.0,
            status: "قيد الانتظار".into(),
            date: "2026-01-14".into(),
            due_date: "2026-02-14".into(),
        },
        Invoice {
            id: "INV-003".into(),
            client: "شركة البناء الحديث".into(),
            amount: 22000.0,
            paid: 10000.0,
            due: 12000.0,
            status: "مدفوعة جزئيا".into(),
            date: "2026-01-12".into(),
            due_date: "2026-02-12".into(),
        },
        Invoice {
            id: "INV-004".into(),
            client: "مكتب الهندسة المتقدمة".into(),
            amount: 5200.0,
            paid: 0.0,
            due: 5200.0,
            status: "متأخرة".into(),
            date: "2025-12-20".into(),
            due_date: "2026-01-20".into(),
        },
        Invoice {
            id: "INV-005".into(),
            client: "شركة التقنية الذكية".into(),
            amount: 12750.0,
            paid: 12750.0,
            due: 0.0,
            status: "مدفوعة".into(),
            date: "2026-01-10".into(),
            due_date: "2026-02-10".into(),
        },
    ]
}

pub fn payments() -> Vec<Payment> {
    vec![
        Payment {
            id: "PAY-001".into(),
            invoice: "INV-001".into(),
            client: "شركة الأمل التجارية".into(),
            amount: 15000.0,
            method: "تحويل بنكي".into(),
            wallet: "البنك الأهلي".into(),
            status: "مكتملة".into(),
            date: "2026-01-15".into(),
            reference: "TRF-84512".into(),
        },
        Payment {
            id: "PAY-002".into(),
            invoice: "INV-003".into(),
            client: "شركة البناء الحديث".into(),
            amount: 10000.0,
            method: "شيك".into(),
            wallet: "بنك الراجحي".into(),
            status: "قيد المعالجة".into(),
            date: "2026-01-13".into(),
            reference: "CHK-2201".into(),
        },
        Payment {
            id: "PAY-003".into(),
            invoice: "INV-005".into(),
            client: "شركة التقنية الذكية".into(),
            amount: 12750.0,
            method: "نقدا".into(),
            wallet: "الصندوق النقدي".into(),
            status: "مكتملة".into(),
            date: "2026-01-10".into(),
            reference: "CSH-0031".into(),
        },
        Payment {
            id: "PAY-004".into(),
            invoice: "INV-002".into(),
            client: "مؤسسة النور للتجارة".into(),
            amount: 4000.0,
            method: "بطاقة ائتمان".into(),
            wallet: "البنك الأهلي".into(),
            status: "قيد المعالجة".into(),
            date: "2026-01-16".into(),
            reference: "CRD-7719".into(),
        },
    ]
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "CUS-001".into(),
            name: "شركة الأمل التجارية".into(),
            status: "نشط".into(),
            email: "info@alamal.com".into(),
            phone: "0501234567".into(),
            city: "الرياض".into(),
            invoices: 12,
            sales: 125000.0,
            paid: 110000.0,
            due: 15000.0,
        },
        Customer {
            id: "CUS-002".into(),
            name: "مؤسسة النور للتجارة".into(),
            status: "نشط".into(),
            email: "contact@alnoor.com".into(),
            phone: "0557654321".into(),
            city: "جدة".into(),
            invoices: 8,
            sales: 64000.0,
            paid: 55500.0,
            due: 8500.0,
        },
        Customer {
            id: "CUS-003".into(),
            name: "شركة البناء الحديث".into(),
            status: "نشط".into(),
            email: "sales@modernbuild.com".into(),
            phone: "0533332211".into(),
            city: "الدمام".into(),
            invoices: 15,
            sales: 210000.0,
            paid: 198000.0,
            due: 12000.0,
        },
        Customer {
            id: "CUS-004".into(),
            name: "مكتب الهندسة المتقدمة".into(),
            status: "غير نشط".into(),
            email: "office@advanced-eng.com".into(),
            phone: "0509988776".into(),
            city: "الرياض".into(),
            invoices: 3,
            sales: 18200.0,
            paid: 13000.0,
            due: 5200.0,
        },
    ]
}

pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: "SUP-001".into(),
            name: "مصنع الخليج للبلاستيك".into(),
            status: "نشط".into(),
            email: "sales@gulfplast.com".into(),
            phone: "0112345678".into(),
            city: "الرياض".into(),
            orders: 22,
            purchases: 340000.0,
            outstanding: 25000.0,
        },
        Supplier {
            id: "SUP-002".into(),
            name: "شركة المعدات الصناعية".into(),
            status: "نشط".into(),
            email: "info@indequip.com".into(),
            phone: "0126789012".into(),
            city: "جدة".into(),
            orders: 14,
            purchases: 186000.0,
            outstanding: 0.0,
        },
        Supplier {
            id: "SUP-003".into(),
            name: "مؤسسة التوريدات العامة".into(),
            status: "غير نشط".into(),
            email: "contact@gensupply.com".into(),
            phone: "0138765432".into(),
            city: "الدمام".into(),
            orders: 5,
            purchases: 42000.0,
            outstanding: 9000.0,
        },
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: "PROD-001".into(),
            name: "لابتوب ديل XPS 15".into(),
            category: "الإلكترونيات".into(),
            sku: "DL-XPS15-01".into(),
            supplier: "شركة المعدات الصناعية".into(),
            status: "متوفر".into(),
            stock: 24,
            price: 7500.0,
        },
        Product {
            id: "PROD-002".into(),
            name: "شاشة سامسونج 27 بوصة".into(),
            category: "الإلكترونيات".into(),
            sku: "SM-M27-04".into(),
            supplier: "شركة المعدات الصناعية".into(),
            status: "منخفض".into(),
            stock: 4,
            price: 1150.0,
        },
        Product {
            id: "PROD-003".into(),
            name: "كرسي مكتبي طبي".into(),
            category: "أثاث".into(),
            sku: "CH-ERG-11".into(),
            supplier: "مصنع الخليج للبلاستيك".into(),
            status: "متوفر".into(),
            stock: 40,
            price: 850.0,
        },
        Product {
            id: "PROD-004".into(),
            name: "حبر طابعة HP 305".into(),
            category: "مستلزمات".into(),
            sku: "HP-305-BK".into(),
            supplier: "مؤسسة التوريدات العامة".into(),
            status: "نافد".into(),
            stock: 0,
            price: 95.0,
        },
        Product {
            id: "PROD-005".into(),
            name: "لوحة مفاتيح لاسلكية".into(),
            category: "ملحقات".into(),
            sku: "KB-WL-09".into(),
            supplier: "شركة المعدات الصناعية".into(),
            status: "متوفر".into(),
            stock: 65,
            price: 180.0,
        },
    ]
}

pub fn purchases() -> Vec<Purchase> {
    vec![
        Purchase {
            id: "PUR-001".into(),
            supplier: "مصنع الخليج للبلاستيك".into(),
            warehouse: "المستودع الرئيسي".into(),
            date: "2026-01-16".into(),
            items_count: 120,
            total: 45000.0,
            paid: 45000.0,
        },
        Purchase {
            id: "PUR-002".into(),
            supplier: "شركة المعدات الصناعية".into(),
            warehouse: "مستودع جدة".into(),
            date: "2026-01-14".into(),
            items_count: 12,
            total: 90000.0,
            paid: 40000.0,
        },
        Purchase {
            id: "PUR-003".into(),
            supplier: "مؤسسة التوريدات العامة".into(),
            warehouse: "المستودع الرئيسي".into(),
            date: "2026-01-11".into(),
            items_count: 300,
            total: 9000.0,
            paid: 0.0,
        },
        Purchase {
            id: "PUR-004".into(),
            supplier: "مصنع الخليج للبلاستيك".into(),
            warehouse: "مستودع الدمام".into(),
            date: "2026-01-08".into(),
            items_count: 80,
            total: 28000.0,
            paid: 28000.0,
        },
    ]
}

pub fn expenses() -> Vec<Expense> {
    vec![
        Expense {
            id: "EXP-001".into(),
            description: "فاتورة الكهرباء - يناير".into(),
            category: "مصاريف تشغيل".into(),
            amount: 1500.0,
            wallet: "البنك الأهلي".into(),
            date: "2026-01-05".into(),
            reference: "ELC-0126".into(),
        },
        Expense {
            id: "EXP-002".into(),
            description: "صيانة مكيفات المستودع".into(),
            category: "صيانة".into(),
            amount: 3200.0,
            wallet: "الصندوق النقدي".into(),
            date: "2026-01-09".into(),
            reference: "MNT-4410".into(),
        },
        Expense {
            id: "EXP-003".into(),
            description: "رواتب شهر ديسمبر".into(),
            category: "رواتب".into(),
            amount: 86000.0,
            wallet: "بنك الراجحي".into(),
            date: "2026-01-01".into(),
            reference: "SAL-1225".into(),
        },
        Expense {
            id: "EXP-004".into(),
            description: "أدوات مكتبية".into(),
            category: "مستلزمات".into(),
            amount: 640.0,
            wallet: "الصندوق النقدي".into(),
            date: "2026-01-12".into(),
            reference: "OFF-0218".into(),
        },
    ]
}

pub fn vaults() -> Vec<Vault> {
    vec![
        Vault {
            id: "VLT-001".into(),
            name: "الخزنة الرئيسية".into(),
            location: "المكتب الرئيسي - الرياض".into(),
            balance: 125000.0,
            currency: "SAR".into(),
            min_balance: 20000.0,
        },
        Vault {
            id: "VLT-002".into(),
            name: "خزنة الفرع".into(),
            location: "فرع جدة".into(),
            balance: 38500.0,
            currency: "SAR".into(),
            min_balance: 10000.0,
        },
        Vault {
            id: "VLT-003".into(),
            name: "خزنة العملات".into(),
            location: "المكتب الرئيسي - الرياض".into(),
            balance: 12000.0,
            currency: "USD".into(),
            min_balance: 2000.0,
        },
    ]
}

pub fn vault_movements() -> Vec<VaultMovement> {
    vec![
        VaultMovement {
            id: "MOV-001".into(),
            date: "2026-01-16".into(),
            time: "10:30".into(),
            vault: "الخزنة الرئيسية".into(),
            kind: "إيداع".into(),
            amount: 15000.0,
            currency: "SAR".into(),
            description: "تحصيل نقدي من عميل".into(),
            reference: "INV-001".into(),
        },
        VaultMovement {
            id: "MOV-002".into(),
            date: "2026-01-16".into(),
            time: "13:15".into(),
            vault: "الخزنة الرئيسية".into(),
            kind: "سحب".into(),
            amount: 3200.0,
            currency: "SAR".into(),
            description: "مصاريف صيانة".into(),
            reference: "EXP-002".into(),
        },
        VaultMovement {
            id: "MOV-003".into(),
            date: "2026-01-15".into(),
            time: "09:45".into(),
            vault: "خزنة الفرع".into(),
            kind: "إيداع".into(),
            amount: 8500.0,
            currency: "SAR".into(),
            description: "إيراد مبيعات الفرع".into(),
            reference: "BR-0115".into(),
        },
        VaultMovement {
            id: "MOV-004".into(),
            date: "2026-01-14".into(),
            time: "16:20".into(),
            vault: "خزنة العملات".into(),
            kind: "سحب".into(),
            amount: 1000.0,
            currency: "USD".into(),
            description: "دفعة مورد خارجي".into(),
            reference: "SUP-002".into(),
        },
    ]
}

pub fn bank_accounts() -> Vec<BankAccount> {
    vec![
        BankAccount {
            id: "BNK-001".into(),
            name: "الحساب الجاري الرئيسي".into(),
            bank_name: "البنك الأهلي".into(),
            kind: "حساب جاري".into(),
            currency: "SAR".into(),
            balance: 845000.0,
            iban: "SA4410000001234567891234".into(),
            branch: "فرع العليا".into(),
        },
        BankAccount {
            id: "BNK-002".into(),
            name: "حساب المشتريات".into(),
            bank_name: "بنك الراجحي".into(),
            kind: "حساب جاري".into(),
            currency: "SAR".into(),
            balance: 230000.0,
            iban: "SA0380000009876543219876".into(),
            branch: "فرع الملز".into(),
        },
        BankAccount {
            id: "BNK-003".into(),
            name: "حساب التوفير".into(),
            bank_name: "البنك الأهلي".into(),
            kind: "حساب توفير".into(),
            currency: "USD".into(),
            balance: 52000.0,
            iban: "SA4410000005555444433332".into(),
            branch: "فرع العليا".into(),
        },
    ]
}

pub fn bank_transactions() -> Vec<BankTransaction> {
    vec![
        BankTransaction {
            id: "TRX-000001".into(),
            date: "2026-01-16".into(),
            time: "11:05".into(),
            account: "الحساب الجاري الرئيسي".into(),
            kind: "إيداع".into(),
            amount: 15000.0,
            currency: "SAR".into(),
            description: "تحويل من شركة الأمل".into(),
            reference: "TRF-84512".into(),
            status: "مكتمل".into(),
        },
        BankTransaction {
            id: "TRX-000002".into(),
            date: "2026-01-15".into(),
            time: "14:40".into(),
            account: "حساب المشتريات".into(),
            kind: "سحب".into(),
            amount: 40000.0,
            currency: "SAR".into(),
            description: "دفعة لمورد المعدات".into(),
            reference: "PUR-002".into(),
            status: "مكتمل".into(),
        },
        BankTransaction {
            id: "TRX-000003".into(),
            date: "2026-01-15".into(),
            time: "09:10".into(),
            account: "الحساب الجاري الرئيسي".into(),
            kind: "سحب".into(),
            amount: 1500.0,
            currency: "SAR".into(),
            description: "فاتورة الكهرباء".into(),
            reference: "ELC-0126".into(),
            status: "قيد المعالجة".into(),
        },
        BankTransaction {
            id: "TRX-000004".into(),
            date: "2026-01-13".into(),
            time: "12:30".into(),
            account: "حساب التوفير".into(),
            kind: "إيداع".into(),
            amount: 5000.0,
            currency: "USD".into(),
            description: "تحويل ادخار شهري".into(),
            reference: "SVG-0113".into(),
            status: "مكتمل".into(),
        },
    ]
}

pub fn wallets() -> Vec<Wallet> {
    vec![
        Wallet {
            id: "WLT-001".into(),
            name: "الصندوق النقدي".into(),
            kind: "نقدي".into(),
            currency: "SAR".into(),
            balance: 125000.0,
            status: "نشط".into(),
        },
        Wallet {
            id: "WLT-002".into(),
            name: "البنك الأهلي".into(),
            kind: "بنك".into(),
            currency: "SAR".into(),
            balance: 845000.0,
            status: "نشط".into(),
        },
        Wallet {
            id: "WLT-003".into(),
            name: "بنك الراجحي".into(),
            kind: "بنك".into(),
            currency: "SAR".into(),
            balance: 230000.0,
            status: "نشط".into(),
        },
        Wallet {
            id: "WLT-004".into(),
            name: "بطاقة الشركة".into(),
            kind: "بطاقة".into(),
            currency: "SAR".into(),
            balance: 18000.0,
            status: "غير نشط".into(),
        },
    ]
}

pub fn wallet_movements() -> Vec<WalletMovement> {
    vec![
        WalletMovement {
            id: "MOV-001".into(),
            date: "2026-01-16".into(),
            time: "10:30".into(),
            title: "تحصيل فاتورة INV-001".into(),
            amount: 15000.0,
            currency: "ر.س".into(),
            kind: "إيداع".into(),
            reference: "PAY-001".into(),
        },
        WalletMovement {
            id: "MOV-002".into(),
            date: "2026-01-15".into(),
            time: "13:00".into(),
            title: "سداد مشتريات".into(),
            amount: 40000.0,
            currency: "ر.س".into(),
            kind: "سحب".into(),
            reference: "PUR-002".into(),
        },
        WalletMovement {
            id: "MOV-003".into(),
            date: "2026-01-14".into(),
            time: "15:45".into(),
            title: "إيراد مبيعات نقدية".into(),
            amount: 6200.0,
            currency: "ر.س".into(),
            kind: "إيداع".into(),
            reference: "CSH-0044".into(),
        },
    ]
}

pub fn transfers() -> Vec<Transfer> {
    vec![
        Transfer {
            id: "TRF-001".into(),
            date: "2026-01-16".into(),
            time: "09:30".into(),
            from: "البنك الأهلي".into(),
            to: "الصندوق النقدي".into(),
            amount: 20000.0,
            fees: 0.0,
            net: 20000.0,
            description: "تغذية الصندوق النقدي".into(),
            status: "مكتمل".into(),
        },
        Transfer {
            id: "TRF-002".into(),
            date: "2026-01-15".into(),
            time: "14:10".into(),
            from: "بنك الراجحي".into(),
            to: "البنك الأهلي".into(),
            amount: 50000.0,
            fees: 25.0,
            net: 49975.0,
            description: "موازنة الحسابات".into(),
            status: "مكتمل".into(),
        },
        Transfer {
            id: "TRF-003".into(),
            date: "2026-01-14".into(),
            time: "11:55".into(),
            from: "الصندوق النقدي".into(),
            to: "بطاقة الشركة".into(),
            amount: 5000.0,
            fees: 10.0,
            net: 4990.0,
            description: "شحن بطاقة الشركة".into(),
            status: "قيد المعالجة".into(),
        },
    ]
}

pub fn users() -> Vec<UserAccount> {
    vec![
        UserAccount {
            id: "USR-001".into(),
            name: "أحمد محمد".into(),
            email: "ahmed@daftar.sa".into(),
            role: "مدير النظام".into(),
            status: "نشط".into(),
            last_login: "2026-01-16 09:12".into(),
        },
        UserAccount {
            id: "USR-002".into(),
            name: "سارة عبدالله".into(),
            email: "sara@daftar.sa".into(),
            role: "محاسب".into(),
            status: "نشط".into(),
            last_login: "2026-01-16 08:45".into(),
        },
        UserAccount {
            id: "USR-003".into(),
            name: "خالد العتيبي".into(),
            email: "khaled@daftar.sa".into(),
            role: "مشرف".into(),
            status: "نشط".into(),
            last_login: "2026-01-15 17:30".into(),
        },
        UserAccount {
            id: "USR-004".into(),
            name: "نورة السالم".into(),
            email: "noura@daftar.sa".into(),
            role: "مشاهد".into(),
            status: "غير نشط".into(),
            last_login: "2025-12-28 10:05".into(),
        },
    ]
}

pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            id: "PLN-001".into(),
            name: "الأساسية".into(),
            price_monthly: 99.0,
            price_yearly: 990.0,
            description: "للمنشآت الناشئة والأعمال الصغيرة".into(),
            badge: None,
            featured: false,
            features: vec![
                "مستخدم واحد".into(),
                "الفواتير والمدفوعات".into(),
                "تقارير شهرية".into(),
            ],
        },
        Plan {
            id: "PLN-002".into(),
            name: "الاحترافية".into(),
            price_monthly: 249.0,
            price_yearly: 2490.0,
            description: "للشركات المتوسطة متعددة الفروع".into(),
            badge: Some("الأكثر شيوعا".into()),
            featured: true,
            features: vec![
                "حتى 10 مستخدمين".into(),
                "كل ميزات الباقة الأساسية".into(),
                "إدارة المخزون والمشتريات".into(),
                "سجل النشاطات".into(),
            ],
        },
        Plan {
            id: "PLN-003".into(),
            name: "المؤسسات".into(),
            price_monthly: 599.0,
            price_yearly: 5990.0,
            description: "للمؤسسات الكبيرة باحتياجات مخصصة".into(),
            badge: None,
            featured: false,
            features: vec![
                "مستخدمون غير محدودين".into(),
                "كل ميزات الباقة الاحترافية".into(),
                "صلاحيات متقدمة".into(),
                "دعم مخصص".into(),
            ],
        },
    ]
}

pub fn activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            id: "ACT-001".into(),
            user: "أحمد محمد".into(),
            section: "الفواتير".into(),
            action: "إضافة".into(),
            description: "إنشاء الفاتورة INV-005".into(),
            date: "2026-01-16".into(),
            time: "09:20".into(),
            ip: "192.168.1.10".into(),
        },
        ActivityEntry {
            id: "ACT-002".into(),
            user: "سارة عبدالله".into(),
            section: "المدفوعات".into(),
            action: "تعديل".into(),
            description: "تحديث حالة الدفعة PAY-002".into(),
            date: "2026-01-16".into(),
            time: "08:50".into(),
            ip: "192.168.1.14".into(),
        },
        ActivityEntry {
            id: "ACT-003".into(),
            user: "خالد العتيبي".into(),
            section: "المستخدمين".into(),
            action: "تسجيل دخول".into(),
            description: "تسجيل دخول ناجح".into(),
            date: "2026-01-15".into(),
            time: "17:30".into(),
            ip: "10.0.0.22".into(),
        },
        ActivityEntry {
            id: "ACT-004".into(),
            user: "أحمد محمد".into(),
            section: "العملاء".into(),
            action: "حذف".into(),
            description: "حذف عميل مكرر".into(),
            date: "2026-01-15".into(),
            time: "12:00".into(),
            ip: "192.168.1.10".into(),
        },
    ]
}

pub fn movements() -> Vec<MovementEntry> {
    vec![
        MovementEntry {
            id: "MOV-001".into(),
            date: "2026-01-16".into(),
            time: "10:30".into(),
            account: "الصندوق النقدي".into(),
            kind: "إيداع".into(),
            amount: 15000.0,
            before_balance: 110000.0,
            after_balance: 125000.0,
            description: "تحصيل فاتورة INV-001".into(),
            category: "مبيعات".into(),
        },
        MovementEntry {
            id: "MOV-002".into(),
            date: "2026-01-15".into(),
            time: "14:40".into(),
            account: "بنك الراجحي".into(),
            kind: "سحب".into(),
            amount: 40000.0,
            before_balance: 270000.0,
            after_balance: 230000.0,
            description: "دفعة أمر الشراء PUR-002".into(),
            category: "مشتريات".into(),
        },
        MovementEntry {
            id: "MOV-003".into(),
            date: "2026-01-15".into(),
            time: "09:10".into(),
            account: "البنك الأهلي".into(),
            kind: "سحب".into(),
            amount: 1500.0,
            before_balance: 846500.0,
            after_balance: 845000.0,
            description: "فاتورة الكهرباء".into(),
            category: "مصروفات".into(),
        },
        MovementEntry {
            id: "MOV-004".into(),
            date: "2026-01-14".into(),
            time: "15:45".into(),
            account: "الصندوق النقدي".into(),
            kind: "إيداع".into(),
            amount: 6200.0,
            before_balance: 103800.0,
            after_balance: 110000.0,
            description: "مبيعات نقدية".into(),
            category: "مبيعات".into(),
        },
    ]
}

pub fn report_rows() -> Vec<ReportRow> {
    vec![
        ReportRow { month: "أغسطس".into(), sales: 184000.0, cost: 121000.0 },
        ReportRow { month: "سبتمبر".into(), sales: 203500.0, cost: 138000.0 },
        ReportRow { month: "أكتوبر".into(), sales: 176200.0, cost: 119500.0 },
        ReportRow { month: "نوفمبر".into(), sales: 221000.0, cost: 149000.0 },
        ReportRow { month: "ديسمبر".into(), sales: 198700.0, cost: 132400.0 },
        ReportRow { month: "يناير".into(), sales: 154300.0, cost: 98600.0 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Record;

    #[test]
    fn test_fixture_ids_are_unique_per_page() {
        fn assert_unique<T: Record>(records: &[T]) {
            let mut ids: Vec<&str> = records.iter().map(|r| r.id()).collect();
            let before = ids.len();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), before);
        }
        assert_unique(&invoices());
        assert_unique(&payments());
        assert_unique(&customers());
        assert_unique(&suppliers());
        assert_unique(&products());
        assert_unique(&purchases());
        assert_unique(&expenses());
        assert_unique(&vault_movements());
        assert_unique(&bank_transactions());
        assert_unique(&wallet_movements());
        assert_unique(&transfers());
        assert_unique(&users());
        assert_unique(&activity());
        assert_unique(&movements());
    }

    #[test]
    fn test_invoice_amounts_reconcile() {
        for invoice in invoices() {
            assert_eq!(invoice.paid + invoice.due, invoice.amount, "{}", invoice.id);
        }
    }

    #[test]
    fn test_transfer_net_is_amount_minus_fees() {
        for transfer in transfers() {
            assert_eq!(transfer.net, transfer.amount - transfer.fees, "{}", transfer.id);
        }
    }

    #[test]
    fn test_movement_balances_reconcile() {
        for m in movements() {
            let expected = match m.kind.as_str() {
                "إيداع" => m.before_balance + m.amount,
                _ => m.before_balance - m.amount,
            };
            assert_eq!(m.after_balance, expected, "{}", m.id);
        }
    }
}
