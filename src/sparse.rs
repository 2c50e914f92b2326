use std::collections::BTreeMap;
use num_traits::{Num,Zero};

///Read-only view of a matrix, as far as ordering is concerned.
///Only the sparsity pattern matters: an entry equal to zero is "no edge".
pub trait SparseView{
    type F : Zero+Copy;
    fn get_nrows(&self) -> usize;
    fn get_ncols(&self) -> usize;
    fn get(&self,i : usize,j : usize) -> Self::F;
    ///Nonzero columns of row `i` if the storage can list them
    ///without a dense scan. Callers fall back to `get` on `None`.
    fn nonzero_cols_of_row(&self,_i : usize) -> Option<Vec<usize>>{ None }
}

///Nonzero columns of row `i`, through the fast path when the view offers one.
pub fn row_pattern<M : SparseView>(mat : &M,i : usize) -> Vec<usize>{
    match mat.nonzero_cols_of_row(i){
        Some(cols) => cols,
        None => (0..mat.get_ncols()).filter(|&j| !mat.get(i,j).is_zero()).collect()
    }
}

///A simple compressed column sparse matrix.
///Keeps a row-wise copy of the pattern so row scans don't touch every column.
pub struct CSCSparse<F>{
    nrows : usize,
    ncols : usize,
    //Offsets into column data
    offsets : Vec<usize>,
    //Nonzero row entries
    rids : Vec<usize>,
    //Nonzero values
    vals : Vec<F>,
    //Offsets into row pattern
    row_offsets : Vec<usize>,
    //Column ids of numerically nonzero entries, sorted within each row
    cids : Vec<usize>
}


impl <F : Num+Copy> CSCSparse<F>{

    pub fn panic_if_invalid(&self){
        assert_eq!(self.offsets.len(),self.ncols+1);
        assert_eq!(self.offsets[0],0);
        //TODO: Replace with "is_sorted" when it merges
        for i in 1..self.offsets.len(){
            assert!(self.offsets[i-1]<=self.offsets[i]);
        }
        assert_eq!(*self.offsets.last().unwrap(),self.rids.len());
        for r in self.rids.iter(){
            assert!(*r < self.nrows);
        }
        for i in 1..self.offsets.len(){
            let beg=self.offsets[i-1];
            let end=self.offsets[i];
            //Require rows to be sorted and unique in each column
            for j in beg+1..end{
                assert!(self.rids[j-1]<self.rids[j]);
            }
        }
        assert_eq!(self.rids.len(),self.vals.len());
        assert_eq!(self.row_offsets.len(),self.nrows+1);
        assert_eq!(*self.row_offsets.last().unwrap(),self.cids.len());
    }

    pub fn new(nrows : usize, ncols : usize, offsets : Vec<usize>,rids : Vec<usize>,vals : Vec<F>) -> Self{
        //Put the row indices of every column in sorted order
        let mut rs = rids;
        let mut vs = vals;
        for i in 1..offsets.len(){
            let beg=offsets[i-1];
            let end=offsets[i];
            let mut pairs : Vec<(usize,F)> = rs[beg..end].iter().cloned().zip(vs[beg..end].iter().cloned()).collect();
            pairs.sort_by_key(|&(r,_)| r);
            for (j,(r,v)) in pairs.into_iter().enumerate(){
                rs[beg+j]=r;
                vs[beg+j]=v;
            }
        }

        //Transpose the pattern. Walking columns in order leaves
        //each row's column list sorted.
        let mut counts = vec![0 as usize;nrows+1];
        for i in 1..offsets.len(){
            for k in offsets[i-1]..offsets[i]{
                if !vs[k].is_zero() && rs[k]<nrows{
                    counts[rs[k]+1]+=1;
                }
            }
        }
        for r in 0..nrows{
            counts[r+1]+=counts[r];
        }
        let row_offsets=counts;
        let mut next=row_offsets.clone();
        let mut cids = vec![0 as usize;*row_offsets.last().unwrap_or(&0)];
        for i in 1..offsets.len(){
            for k in offsets[i-1]..offsets[i]{
                if !vs[k].is_zero() && rs[k]<nrows{
                    cids[next[rs[k]]]=i-1;
                    next[rs[k]]+=1;
                }
            }
        }

        let out = CSCSparse { nrows : nrows, ncols : ncols, offsets : offsets,rids : rs, vals : vs,
                              row_offsets : row_offsets, cids : cids };
        out.panic_if_invalid();
        out
    }

    ///Assembles a matrix from (row,column,value) triplets.
    ///Repeated positions are summed.
    pub fn from_triplets(nrows : usize,ncols : usize,triplets : &[(usize,usize,F)]) -> Self{
        let mut entries = BTreeMap::<(usize,usize),F>::new();
        for &(r,c,v) in triplets.iter(){
            assert!(r<nrows);
            assert!(c<ncols);
            let e = entries.entry((c,r)).or_insert(F::zero());
            *e = *e + v;
        }
        let mut offsets = vec![0 as usize;ncols+1];
        let mut rids = Vec::<usize>::with_capacity(entries.len());
        let mut vals = Vec::<F>::with_capacity(entries.len());
        for (&(c,r),&v) in entries.iter(){
            offsets[c+1]+=1;
            rids.push(r);
            vals.push(v);
        }
        for c in 0..ncols{
            offsets[c+1]+=offsets[c];
        }
        CSCSparse::new(nrows,ncols,offsets,rids,vals)
    }

    pub fn get_nrows(&self) -> usize{ self.nrows }
    pub fn get_ncols(&self) -> usize{ self.ncols }
    pub fn nnz(&self) -> usize{ self.rids.len() }

    ///Symmetric permutation `P A P^T`: entry (k,l) of the result
    ///is entry (p[k],p[l]) of `self`. This is what a factorizer does
    ///with an elimination ordering before it starts.
    pub fn permute_symmetric(&self,p : &[usize]) -> Self{
        assert_eq!(self.nrows,self.ncols);
        assert_eq!(p.len(),self.ncols);
        let mut pinv = vec![0 as usize;p.len()];
        for (k,&pk) in p.iter().enumerate(){
            pinv[pk]=k;
        }
        let mut offsets = Vec::<usize>::with_capacity(self.ncols+1);
        let mut rids = Vec::<usize>::with_capacity(self.nnz());
        let mut vals = Vec::<F>::with_capacity(self.nnz());
        offsets.push(0);
        for &oldc in p.iter(){
            let beg=self.offsets[oldc];
            let end=self.offsets[oldc+1];
            for (r,v) in self.rids[beg..end].iter().zip(self.vals[beg..end].iter()){
                rids.push(pinv[*r]);
                vals.push(*v);
            }
            offsets.push(rids.len());
        }
        CSCSparse::new(self.nrows,self.ncols,offsets,rids,vals)
    }

    ///Dense column-major copy of the whole matrix.
    pub fn to_dense(&self) -> DenseMatrix<F>{
        let mut out = DenseMatrix::zeros(self.nrows,self.ncols);
        for c in 0..self.ncols{
            let beg=self.offsets[c];
            let end=self.offsets[c+1];
            for (r,v) in self.rids[beg..end].iter().zip(self.vals[beg..end].iter()){
                out.set(*r,c,*v);
            }
        }
        out
    }
}

impl <F : Num+Copy> SparseView for CSCSparse<F>{
    type F=F;
    fn get_nrows(&self) -> usize{ self.nrows }
    fn get_ncols(&self) -> usize{ self.ncols }
    fn get(&self,i : usize,j : usize) -> F{
        let beg=self.offsets[j];
        let end=self.offsets[j+1];
        match self.rids[beg..end].binary_search(&i){
            Ok(k) => self.vals[beg+k],
            Err(_) => F::zero()
        }
    }
    fn nonzero_cols_of_row(&self,i : usize) -> Option<Vec<usize>>{
        Some(self.cids[self.row_offsets[i]..self.row_offsets[i+1]].to_vec())
    }
}

///Dense column-major matrix. Only offers the `get` path
///to the ordering engine.
#[derive(Clone,Debug,PartialEq)]
pub struct DenseMatrix<F>{
    nrows : usize,
    ncols : usize,
    data : Vec<F>
}

impl <F : Zero+Copy> DenseMatrix<F>{
    pub fn new(nrows : usize,ncols : usize,data : Vec<F>) -> Self{
        assert_eq!(data.len(),nrows*ncols);
        DenseMatrix { nrows : nrows, ncols : ncols, data : data }
    }
    pub fn zeros(nrows : usize,ncols : usize) -> Self{
        DenseMatrix::new(nrows,ncols,vec![F::zero();nrows*ncols])
    }
    pub fn set(&mut self,i : usize,j : usize,v : F){
        assert!(i<self.nrows && j<self.ncols);
        self.data[i+self.nrows*j]=v;
    }
}

impl <F : Zero+Copy> SparseView for DenseMatrix<F>{
    type F=F;
    fn get_nrows(&self) -> usize{ self.nrows }
    fn get_ncols(&self) -> usize{ self.ncols }
    fn get(&self,i : usize,j : usize) -> F{ self.data[i+self.nrows*j] }
}
